use std::backtrace::Backtrace;
use std::process;

use colored::Colorize;

use rust_feature_tour::driver;

fn main() {
    println!("{}", banner("Welcome to the Rust Feature Tour"));
    println!();
    println!("This program demonstrates everyday Rust idioms to help you");
    println!("learn them one by one.");

    match driver::run_all(driver::DEMOS) {
        Ok(()) => {
            println!();
            println!("{}", banner("All Examples Completed Successfully!").green());
        }
        Err(error) => {
            println!();
            println!("{} {error}", "Error:".red().bold());
            println!("Trace: {}", Backtrace::capture());
            process::exit(1);
        }
    }
}

fn banner(text: &str) -> String {
    let bar = "═".repeat(62);
    format!("╔{bar}╗\n║{text:^62}║\n╚{bar}╝")
}
