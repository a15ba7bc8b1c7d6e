use crate::cli::ElementArgs;
use crate::error::{CliError, Result};
use geoscore::core::materials::element;

pub fn run(args: ElementArgs) -> Result<()> {
    let symbol = args.symbol.trim();
    let data = element::lookup(symbol).ok_or_else(|| {
        CliError::Argument(format!(
            "'{}' is not a symbol of the standard periodic table (Z = 1..92).",
            symbol
        ))
    })?;
    println!(
        "{} ({}): Z = {}, molar mass = {} g/mole",
        symbol, data.name, data.z, data.molar_mass
    );
    Ok(())
}
