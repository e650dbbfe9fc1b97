//! Typing window binary entry point (environment configuration only).

fn main() {
    typerace_gui::init_tracing();
    let exit_code = run_and_report(typerace_gui::run_from_env);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_and_report<F, E>(runner: F) -> i32
where
    F: FnOnce() -> Result<(), E>,
    E: std::fmt::Display,
{
    match runner() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("typerace error: {}", err);
            1
        }
    }
}
