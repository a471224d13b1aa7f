use assessment_schema::{AssessmentRecord, Percent, PresentationBand};

fn cell(score: Option<Percent>) -> String {
    match score {
        Some(p) => format!("{:>4}% | {}", p, PresentationBand::for_score(p).label()),
        None => "    - | not assessed".to_string(),
    }
}

pub fn print_snapshot(record: &AssessmentRecord) {
    let snap = report_synth::learning_snapshot(&record.results);

    println!(
        "{} (age {}) - {} game(s) played",
        record.student_name,
        record.student_age,
        record.results.len()
    );
    println!("Area              | Score | Band");
    println!("------------------|-------|------------------");

    let rows = [
        ("Attention", snap.attention),
        ("Working Memory", snap.memory),
        ("Visual Processing", snap.processing),
        ("Impulse Control", snap.impulse),
    ];
    for (label, score) in rows {
        println!("{:<17} | {}", label, cell(score));
    }
}
