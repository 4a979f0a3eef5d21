//! # Proforma CLI Application
//!
//! Terminal-based interface for budget and fee estimation. Prompts for a
//! project description, resolves the built-in cost guide, and prints the
//! full budget / fee / hours breakdown plus machine-readable JSON.

use std::io::{self, BufRead, Write};

use budget_core::calculations::budget::{calculate, BudgetInput};
use budget_core::calculations::fees::{calculate_fees, FeeRateSet};
use budget_core::calculations::hours::distribute_hours;
use budget_core::costs::{BuildingType, CostCatalog, Tier};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_building_type(default: BuildingType) -> BuildingType {
    println!("Building types:");
    for (index, building_type) in BuildingType::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, building_type);
    }
    let choice = prompt_f64("Select building type [2]: ", 2.0) as usize;
    BuildingType::ALL
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or(default)
}

fn main() {
    println!("Proforma CLI - A/E Budget & Fee Estimator");
    println!("=========================================");
    println!();

    let building_type = prompt_building_type(BuildingType::MidRangeStandardResidential);
    let tier_value = prompt_f64("Enter tier (1-3) [1]: ", 1.0) as u8;
    let tier = Tier::from_u8(tier_value).unwrap_or(Tier::One);
    let new_area_ft2 = prompt_f64("Enter new construction area (ft2) [1000.0]: ", 1000.0);
    let existing_area_ft2 = prompt_f64("Enter existing area (ft2) [0.0]: ", 0.0);
    let site_area_m2 = prompt_f64("Enter site area (m2) [500.0]: ", 500.0);
    let hourly_rate = prompt_f64("Enter blended hourly rate ($/hr) [150.0]: ", 150.0);

    println!();
    println!("Calculating {} {} estimate...", building_type, tier);
    println!();

    let input = BudgetInput {
        label: "CLI-Estimate".to_string(),
        building_type,
        tier,
        new_area_ft2,
        existing_area_ft2,
        site_area_m2,
        working_budget_override: None,
    };

    let catalog = CostCatalog::builtin();
    let cost_range = match catalog.cost_range(building_type, tier) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            let tiers = catalog.available_tiers(building_type);
            if !tiers.is_empty() {
                let available: Vec<String> =
                    tiers.iter().map(|t| t.as_u8().to_string()).collect();
                eprintln!("Available tiers for {}: {}", building_type, available.join(", "));
            }
            std::process::exit(1);
        }
    };
    let engineering = catalog.engineering_costs(building_type, tier);

    let result = match calculate(&input, cost_range, &engineering) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    println!("═══════════════════════════════════════");
    println!("  BUDGET ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Type:       {} ({})", building_type, tier);
    println!("  New area:   {:.0} ft2", result.area.new_ft2);
    println!("  Existing:   {:.0} ft2", result.area.existing_ft2);
    println!("  Total:      {:.0} ft2", result.area.total_ft2);
    println!("  Site:       {:.0} ft2 ({:.2} m2)", result.area.site_ft2, site_area_m2);
    println!();
    println!("Construction Cost ({:.0}-{:.0} $/ft2):",
        result.cost_basis.allin_min,
        result.cost_basis.allin_max
    );
    println!("  Low:        ${:>14.2}", result.total_cost.low);
    println!("  Proposed:   ${:>14.2}", result.total_cost.proposed);
    println!("  High:       ${:>14.2}", result.total_cost.high);
    println!();
    println!("Minimum Budgets:");
    println!("  Shell:      ${:>14.2}  ({:.0}%)",
        result.minimum_budgets.shell,
        result.cost_basis.arch_share * 100.0
    );
    println!("  Interior:   ${:>14.2}  ({:.0}%)",
        result.minimum_budgets.interior,
        result.cost_basis.interior_share * 100.0
    );
    println!("  Landscape:  ${:>14.2}  ({:.0}%)",
        result.minimum_budgets.landscape,
        result.cost_basis.landscape_share * 100.0
    );
    println!();
    println!("Working budget: ${:.2}", result.working_budget);

    match calculate_fees(&result, &FeeRateSet::default()) {
        Ok(fees) => {
            println!();
            println!("Professional Fees:");
            for line in &fees.scope_fees {
                println!("  {:<12} ${:>12.2} market / ${:>12.2} internal",
                    line.scope.display_name(),
                    line.market_fee,
                    line.internal_fee
                );
            }
            for line in &fees.consultant_fees {
                println!("  {:<12} ${:>12.2} consultant ({:.1}%)",
                    line.category.display_name(),
                    line.fee,
                    line.percent_avg
                );
            }
            println!("  Total market fee:     ${:.2}", fees.total_market_fee);
            println!("  Total consultant fee: ${:.2}", fees.total_consultant_fee);

            if let Ok(hours) = distribute_hours(fees.total_market_fee, hourly_rate) {
                println!();
                println!("Hours at ${:.0}/hr:", hourly_rate);
                for line in &hours.phases {
                    println!("  {:<28} {:>8.1} hrs  ({:.0}%)",
                        line.phase.display_name(),
                        line.hours,
                        line.percent
                    );
                }
                println!("  Total: {:.1} hrs", hours.total_hours);
            }
        }
        Err(e) => eprintln!("Fee calculation error: {}", e),
    }

    println!();
    println!("═══════════════════════════════════════");
    println!();
    println!("JSON Output (for API/tool use):");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
