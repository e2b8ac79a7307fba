use once_cell::sync::Lazy;
use std::env;

use crate::address::AddressForm;
use crate::error::AppError;

/// Target form used by `convert` when `--form` is not given.
pub static ADDRESS_FORM: Lazy<String> =
    Lazy::new(|| get_var_or("ADDRESS_FORM", &AddressForm::default().to_string()));

pub fn default_form() -> Result<AddressForm, AppError> {
    ADDRESS_FORM.parse::<AddressForm>().map_err(AppError::InvalidForm)
}

fn get_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
