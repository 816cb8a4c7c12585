use std::{path::PathBuf, sync::Arc};

use antt_pricing::{
    adjustment::AdjustmentKind,
    calculation_request::CalculationRequest,
    calculator::FreightCalculator,
    json::calculation::{JsonAxles, JsonCalculationRequest, JsonCalculationResult},
};
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use fretes_routing::{city_catalog::CityCatalog, config::RoutingConfig};

use crate::{rates::load_table, routing_args::RoutingArgs};

#[derive(Args)]
pub struct CalculateArgs {
    /// Cargo type key or label, e.g. `carga_geral`
    #[arg(short, long)]
    cargo_type: String,

    /// Number of axles: 2, 3, 4, 5, 6, 7 or 9
    #[arg(short, long)]
    axles: String,

    /// Origin as `<city>-<UF>`
    #[arg(short, long)]
    origin: String,

    /// Destination as `<city>-<UF>`
    #[arg(long)]
    destination: String,

    /// Vehicle composition
    #[arg(long)]
    composition: bool,

    #[arg(long)]
    high_performance: bool,

    /// The vehicle returns empty
    #[arg(long)]
    empty_return: bool,

    /// Print the JSON response instead of a table
    #[arg(long)]
    json: bool,

    /// Rate table file replacing the embedded one
    #[arg(long, env = "FRETES_RATE_TABLE")]
    rate_table: Option<PathBuf>,

    #[command(flatten)]
    routing: RoutingArgs,
}

impl CalculateArgs {
    fn request(&self) -> JsonCalculationRequest {
        JsonCalculationRequest {
            cargo_type: Some(self.cargo_type.clone()),
            axles: Some(JsonAxles::Text(self.axles.clone())),
            origin_city: Some(self.origin.clone()),
            destination_city: Some(self.destination.clone()),
            is_composition: Some(self.composition),
            is_high_performance: Some(self.high_performance),
            empty_return: Some(self.empty_return),
        }
    }
}

fn money(value: rust_decimal::Decimal) -> String {
    format!("R$ {value:.2}")
}

fn print_result(result: &JsonCalculationResult) {
    let mut output = Table::new();
    output.load_preset(UTF8_FULL).set_header(vec!["", "Valor"]);

    output.add_row(vec![String::from("Rota"), result.route.clone()]);
    output.add_row(vec![
        String::from("Distância"),
        format!("{:.1} km", result.distance),
    ]);
    output.add_row(vec![
        String::from("Carga e descarga"),
        money(result.calculation.load_unload_coefficient),
    ]);
    output.add_row(vec![
        String::from("Deslocamento"),
        format!("R$ {}/km", result.calculation.distance_coefficient),
    ]);
    output.add_row(vec![
        String::from("Frete base"),
        money(result.calculation.base_rate),
    ]);

    for adjustment in &result.calculation.adjustments {
        let value = match adjustment.kind {
            AdjustmentKind::EmptyReturn => {
                format!("+ {}", money(adjustment.value))
            }
            _ => format!("× {}", adjustment.value),
        };
        output.add_row(vec![adjustment.name.clone(), value]);
    }

    output.add_row(vec![
        String::from("Frete mínimo"),
        money(result.freight_value),
    ]);
    output.add_row(vec![String::from("Pedágio"), money(result.toll_value)]);
    output.add_row(vec![String::from("Total"), money(result.total_value)]);

    println!("{output}");
}

pub async fn run(args: CalculateArgs) -> anyhow::Result<()> {
    let request = CalculationRequest::try_from(args.request())?;

    let table = load_table(args.rate_table.as_deref())?;
    let catalog = Arc::new(CityCatalog::embedded()?);
    let routing = RoutingConfig::from(args.routing);
    let calculator = FreightCalculator::new(Arc::new(table), routing.build_client(catalog)?);

    let result = calculator.calculate(&request).await?;
    let json = JsonCalculationResult::from(&result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_result(&json);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CalculateArgs,
    }

    #[test]
    fn test_request_from_args() {
        let cli = TestCli::parse_from([
            "fretes",
            "--cargo-type",
            "carga_geral",
            "--axles",
            "5",
            "--origin",
            "Campinas-SP",
            "--destination",
            "Curitiba-PR",
            "--empty-return",
        ]);

        let request = CalculationRequest::try_from(cli.args.request()).unwrap();

        assert_eq!(request.axles, 5);
        assert!(request.modifiers.empty_return);
        assert!(!request.modifiers.composition);
    }

    #[test]
    fn test_money() {
        assert_eq!(money(rust_decimal::Decimal::new(57734, 2)), "R$ 577.34");
        assert_eq!(money(rust_decimal::Decimal::new(5, 0)), "R$ 5.00");
    }
}
