use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fretes_routing::city_catalog::CityCatalog;

#[derive(Args)]
pub struct CitiesArgs {
    /// Two-letter federative unit, e.g. `SP`
    #[arg(short, long)]
    uf: Option<String>,

    /// Part of the city name
    #[arg(short, long)]
    query: Option<String>,
}

pub fn run(args: CitiesArgs) -> anyhow::Result<()> {
    let catalog = CityCatalog::embedded()?;
    let cities = catalog.search(args.uf.as_deref(), args.query.as_deref());

    let mut output = Table::new();
    output
        .load_preset(UTF8_FULL)
        .set_header(vec!["Cidade", "UF", "Latitude", "Longitude"]);

    for city in &cities {
        output.add_row(vec![
            city.name.clone(),
            city.uf.clone(),
            format!("{:.4}", city.lat),
            format!("{:.4}", city.lon),
        ]);
    }

    println!("{output}");
    println!("{} cidade(s)", cities.len());

    Ok(())
}
