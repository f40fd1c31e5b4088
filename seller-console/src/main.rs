use std::sync::Arc;

use anyhow::Context;
use seller_console::{
    ApiResponse, AppError, FormStore, ProductForm, RegistrationSession, StaticConfirm,
    setup_environment,
};
use shared::models::AddProductRequest;

const USAGE: &str = "usage: seller-console <draft.json> [--regenerate]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();

    let mut draft_path = None;
    let mut regenerate = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--regenerate" => regenerate = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => draft_path = Some(arg),
        }
    }
    let draft_path = draft_path.context(USAGE)?;

    tracing::info!(draft = %draft_path, environment = %config.environment, "Loading product draft");

    match run(&draft_path, regenerate, config.assume_yes) {
        Ok(request) => {
            let response = ApiResponse::success(request);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            if err.is_user_facing() {
                tracing::warn!(code = %err.code, "{}", err.message);
            } else {
                tracing::error!(code = %err.code, category = err.code.category().name(), "{}", err.message);
            }
            let response = ApiResponse::<()>::error(&err);
            println!("{}", serde_json::to_string_pretty(&response)?);
            std::process::exit(1);
        }
    }
}

fn run(
    draft_path: &str,
    regenerate: bool,
    assume_yes: bool,
) -> Result<AddProductRequest, AppError> {
    let form = ProductForm::from_json_file(draft_path)?;
    let session = RegistrationSession::new(
        FormStore::new(form),
        Arc::new(StaticConfirm::new(assume_yes)),
    );

    let has_rows = session.store().read(|form| !form.option_combinations.is_empty());
    if regenerate || !has_rows {
        let rows = session.move_to_combinations()?;
        tracing::info!(rows, "Option combinations generated");
    }

    Ok(session.submit()?)
}
