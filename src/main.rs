use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tracing::{debug, error};
use xko_address::{
    address::{self, AddressBody, AddressForm},
    env,
    error::AppError,
    trace::{self, default_subscriber},
};

#[derive(Parser)]
#[command(name = "xko-address")]
#[command(about = "Convert between 0x and XKO checksummed addresses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the 0x checksummed form of each address
    ToEvm {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print the XKO checksummed form of each address
    ToXko {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Print whether each address carries the XKO prefix
    IsXko {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Convert each address to the given form (defaults to ADDRESS_FORM)
    Convert {
        /// standard | alternate
        #[arg(short, long)]
        form: Option<String>,
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

fn main() -> Result<(), AppError> {
    let _ = dotenv();
    trace::init(default_subscriber());

    let cli = Cli::parse();

    match cli.command {
        Command::ToEvm { addresses } => convert_all(&addresses, address::to_standard_form),
        Command::ToXko { addresses } => convert_all(&addresses, address::to_alternate_form),
        Command::IsXko { addresses } => {
            for input in &addresses {
                println!("{}", address::is_alternate_form(input));
            }
            Ok(())
        }
        Command::Convert { form, addresses } => {
            let form = match form {
                Some(form) => form.parse::<AddressForm>().map_err(AppError::InvalidForm)?,
                None => env::default_form()?,
            };
            debug!(%form, "Converting addresses.");
            convert_all(&addresses, |input| {
                let body: AddressBody = input.parse()?;
                Ok(body.encode_as(form))
            })
        }
    }
}

fn convert_all<F>(addresses: &[String], convert: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Result<String, address::AddressError>,
{
    for input in addresses {
        match convert(input) {
            Ok(output) => {
                debug!(%input, %output, "Address converted.");
                println!("{output}");
            }
            Err(err) => {
                error!(%input, %err, "Address conversion failed.");
                return Err(err.into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_form() {
        let cli = Cli::try_parse_from(["xko-address", "convert", "--form", "xko", "0xabc"]).unwrap();
        match cli.command {
            Command::Convert { form, addresses } => {
                assert_eq!(form.as_deref(), Some("xko"));
                assert_eq!(addresses, vec!["0xabc".to_string()]);
                assert_eq!(form.unwrap().parse::<AddressForm>(), Ok(AddressForm::Alternate));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_requires_addresses() {
        assert!(Cli::try_parse_from(["xko-address", "to-evm"]).is_err());
    }

    #[test]
    fn test_convert_all_stops_on_first_error() {
        let addresses = vec![
            "70586beeb7b7aa2e7966df9c8493c6cbfd75c625".to_string(),
            "0x1234".to_string(),
        ];
        let err = convert_all(&addresses, address::to_standard_form).unwrap_err();
        assert!(matches!(
            err,
            AppError::AddressError(address::AddressError::InvalidLength { actual: 4, .. })
        ));
    }
}
