use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
struct Args {
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let record = assessment_loader::load_record_from_path(args.path)?;
    println!("student={}", record.student_name);
    println!("age={}", record.student_age);
    println!("games={}", record.results.len());
    for r in &record.results {
        println!("{}={}", r.game_id, r.accuracy);
    }
    Ok(())
}
