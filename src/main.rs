use contact_book::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    env_logger::init();

    run_app()
}
