use clap::error::ErrorKind;
use docker_svc_mgr::{args, run_app};

fn main() {
    // Parse command-line arguments; usage errors must exit 1, not clap's 2
    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            let requested = matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = e.print();
            std::process::exit(if requested { 0 } else { 1 });
        }
    };
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Run the application logic
    if let Err(e) = run_app(&args) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
    println!("Done!");
}
