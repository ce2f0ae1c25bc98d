use std::process::ExitCode;

use text2png::{report_error, report_success, run, Args, Error, RenderConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = match Args::try_from_argv(std::env::args_os()) {
        Ok(args) => std::env::current_dir()
            .map_err(Error::from)
            .and_then(|dir| run(&args, &RenderConfig::default(), &dir)),
        Err(err) => {
            log::debug!("{err}");
            Err(Error::Usage)
        }
    };

    let path = match result {
        Ok(path) => path,
        Err(err) => {
            // Nothing left to tell anyone if stderr is gone too.
            let _ = report_error(&err, &mut std::io::stderr().lock());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = report_success(&path, &mut std::io::stdout().lock()) {
        let _ = report_error(&Error::Io(err), &mut std::io::stderr().lock());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
