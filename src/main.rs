use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tracking_report_lib::logging::init_logging(log::LevelFilter::Info) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match tracking_report_lib::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
