use std::path::{Path, PathBuf};

use antt_pricing::{
    cargo_type::CargoType,
    json::rate_table::JsonRateTable,
    rate_table::RateTable,
};
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use tracing::info;

#[derive(Args)]
pub struct RatesArgs {
    /// Only print this cargo type, e.g. `carga_geral`
    #[arg(short, long)]
    cargo_type: Option<String>,

    /// Rate table file replacing the embedded one
    #[arg(long, env = "FRETES_RATE_TABLE")]
    rate_table: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn load_table(path: Option<&Path>) -> anyhow::Result<RateTable> {
    Ok(match path {
        Some(path) => {
            info!("Loading rate table from {}", path.display());
            RateTable::from_path(path)?
        }
        None => RateTable::official()?,
    })
}

pub fn run(args: RatesArgs) -> anyhow::Result<()> {
    let table = load_table(args.rate_table.as_deref())?;

    let cargo_type = args
        .cargo_type
        .as_deref()
        .map(str::parse::<CargoType>)
        .transpose()?;

    if args.json {
        let json = JsonRateTable::from_table(&table, cargo_type);
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "{} (vigente desde {})",
        table.resolution(),
        table.effective_from()
    );

    let mut output = Table::new();
    output.load_preset(UTF8_FULL).set_header(vec![
        "Tipo de carga",
        "Eixos",
        "Deslocamento (R$/km)",
        "Carga e descarga (R$)",
    ]);

    for entry in table
        .entries()
        .filter(|entry| cargo_type.is_none_or(|cargo_type| entry.cargo_type == cargo_type))
    {
        output.add_row(vec![
            entry.cargo_type.label().to_owned(),
            entry.axles.to_string(),
            entry.base_coefficient.to_string(),
            entry.load_unload_allowance.to_string(),
        ]);
    }

    println!("{output}");
    println!(
        "Pedágio: R$ {} por eixo por km",
        table.toll_per_axle_km()
    );

    Ok(())
}
