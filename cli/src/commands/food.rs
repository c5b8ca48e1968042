use anyhow::Result;
use std::collections::BTreeMap;
use std::process;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use nosh_core::catalog::{FoodCatalog, FoodInfo};

use super::helpers::json_error;

pub(crate) fn cmd_food_list(catalog: &FoodCatalog, search: Option<&str>, json: bool) -> Result<()> {
    let query = search.map(str::to_lowercase);
    let matches: Vec<(&str, &FoodInfo)> = catalog
        .iter()
        .filter(|(name, _)| {
            query
                .as_deref()
                .is_none_or(|q| name.to_lowercase().contains(q))
        })
        .collect();

    if matches.is_empty() {
        let q = search.unwrap_or_default();
        if json {
            println!("{}", json_error(&format!("No foods match '{q}'")));
        } else {
            eprintln!("No foods match '{q}'");
        }
        process::exit(2);
    }

    if json {
        let map: BTreeMap<&str, &FoodInfo> = matches.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct FoodRow {
        #[tabled(rename = "Food")]
        name: String,
        #[tabled(rename = "Calories")]
        calories: String,
        #[tabled(rename = "Protein")]
        protein: String,
        #[tabled(rename = "Fat")]
        fat: String,
        #[tabled(rename = "Carbs")]
        carbs: String,
    }

    let rows: Vec<FoodRow> = matches
        .iter()
        .map(|(name, info)| FoodRow {
            name: (*name).to_string(),
            calories: {
                let cal = info.calories;
                format!("{cal:.0}")
            },
            protein: {
                let p = info.protein_g;
                format!("{p:.1}g")
            },
            fat: {
                let f = info.fat_g;
                format!("{f:.1}g")
            },
            carbs: {
                let c = info.carbs_g;
                format!("{c:.1}g")
            },
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}
