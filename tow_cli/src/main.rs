//! # Towcheck CLI Application
//!
//! Terminal interface for the tongue weight calculator. Prompts for the
//! trailer configuration (loads, then axles), runs the engine once, and
//! prints a formatted report followed by the result as JSON.

use std::io::{self, BufRead, Write};

use tow_core::calculations::tongue::{
    calculate, Axle, TrailerInput, TrailerLoad, RECOMMENDED_MAX_PCT, RECOMMENDED_MIN_PCT,
};

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

fn prompt_count(prompt: &str, default: usize) -> usize {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default).max(1)
}

fn main() {
    println!("Towcheck CLI - Trailer Tongue Weight Calculator");
    println!("===============================================");
    println!();
    println!("Distances are measured in inches from the hitch (hitch = 0 in).");
    println!();

    let num_loads = prompt_count("Number of loads [1]: ", 1);
    let mut loads = Vec::with_capacity(num_loads);
    for i in 0..num_loads {
        let weight_lb = prompt_f64(&format!("Load {} weight (lb) [2000]: ", i + 1), 2000.0);
        let distance_in = prompt_f64(
            &format!("Load {} distance from hitch (in) [100]: ", i + 1),
            100.0,
        );
        loads.push(TrailerLoad::new(weight_lb, distance_in));
    }

    println!();
    let num_axles = prompt_count("Number of axles [2]: ", 2);
    let mut axles = Vec::with_capacity(num_axles);
    for i in 0..num_axles {
        let default_position = 180.0 + i as f64 * 48.0;
        let distance_in = prompt_f64(
            &format!("Axle {} position (in) [{:.0}]: ", i + 1, default_position),
            default_position,
        );
        axles.push(Axle::new(distance_in));
    }

    let input = TrailerInput {
        label: "CLI Session".to_string(),
        loads,
        axles,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  TONGUE WEIGHT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            for (i, load) in input.loads.iter().enumerate() {
                println!(
                    "  Load {}: {:.0} lb at {:.0} in",
                    i + 1,
                    load.weight_lb,
                    load.distance_in
                );
            }
            for (i, axle) in input.axles.iter().enumerate() {
                println!("  Axle {}: {:.0} in", i + 1, axle.distance_in);
            }
            println!();
            println!("Results:");
            println!("  Total weight:        {:.0} lb", result.total_weight_lb);
            println!("  Mean axle position:  {:.1} in", result.axle_position_in);
            println!("  Axle group reaction: {:.0} lb", result.axle_reaction_lb);
            println!(
                "  Tongue weight:       {:.0} lb ({:.1}% of total)",
                result.tongue_weight_lb, result.tongue_weight_pct
            );
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  STATUS: {} (recommended {:.0}-{:.0}%)",
                result.status.display_name(),
                RECOMMENDED_MIN_PCT,
                RECOMMENDED_MAX_PCT
            );
            if let Some(warning) = result.warning() {
                println!("  {}", warning);
            }
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for automation):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
