use super::*;
use crate::{
    scoring::{finish_game, SessionTally},
    templates::NEXT_STEPS,
};
use assessment_schema::{AssessmentStatus, Domain, PresentationBand};
use chrono::TimeZone;
use serde_json::{json, Value};

fn result(game_id: &str, domain: &str, accuracy: u8, extra: Value) -> GameResult {
    let mut v = json!({
        "gameId": game_id,
        "domain": domain,
        "accuracy": accuracy,
    });
    if let (Some(obj), Some(extra)) = (v.as_object_mut(), extra.as_object()) {
        for (k, val) in extra {
            obj.insert(k.clone(), val.clone());
        }
    }
    serde_json::from_value(v).unwrap()
}

fn focus_tap(accuracy: u8) -> GameResult {
    result(
        "focus_tap",
        "attention",
        accuracy,
        json!({
            "gameName": "Focus Tap",
            "hits": 12,
            "misses": 1,
            "falseTaps": 0,
            "avgReaction": 420,
            "totalRounds": 16,
            "timestamp": "2026-03-01T10:15:00.000Z"
        }),
    )
}

fn spot_difference(accuracy: u8) -> GameResult {
    result(
        "spot_difference",
        "visual_attention",
        accuracy,
        json!({ "gameName": "Spot the Difference", "correct": 7, "wrong": 3, "totalRounds": 10 }),
    )
}

fn memory_path(accuracy: u8) -> GameResult {
    result(
        "memory_path",
        "working_memory",
        accuracy,
        json!({ "gameName": "Memory Path", "correctRounds": 4, "maxSequenceLength": 5, "totalRounds": 8 }),
    )
}

fn student() -> Student {
    Student {
        name: "Asha".to_string(),
        age: 7,
    }
}

fn fixed_options() -> SynthesisOptions {
    SynthesisOptions {
        assessment_date: Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 20, 0).unwrap()),
        generated_at: Some(Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()),
    }
}

fn titles(report: &Report) -> Vec<&str> {
    report
        .recommendations
        .iter()
        .map(|r| r.title.as_str())
        .collect()
}

#[test]
fn focus_tap_strength_scenario() {
    let report = synthesize(&student(), &[focus_tap(85)]).unwrap();

    let score = &report.detailed_scores[0];
    assert_eq!(score.name, "Attention");
    assert_eq!(score.game_used, "Focus Tap");
    assert_eq!(score.score.get(), 85);
    assert_eq!(
        score.metrics,
        vec![
            assessment_schema::Metric::new("Avg Reaction Time", "420ms"),
            assessment_schema::Metric::new("Hits", "12/16"),
            assessment_schema::Metric::new("Misses", 1),
            assessment_schema::Metric::new("False Taps", 0),
        ]
    );

    assert_eq!(
        report.strengths,
        vec!["Attention: Demonstrates strong capability with 85% accuracy".to_string()]
    );
    assert_eq!(
        report.areas_for_development,
        vec![templates::DEVELOPMENT_FALLBACK.to_string()]
    );

    let t = titles(&report);
    assert!(t.contains(&"Maintain Attention Skills"));
    assert!(!t.contains(&"Attention Enhancement Activities"));

    assert_eq!(
        report.detailed_analysis[0].observation,
        "Excellent performance in attention. Child achieved 12 successful taps out of 16 rounds."
    );
    assert_eq!(report.detailed_analysis[0].domain, "Attention");
}

#[test]
fn working_memory_gap_scenario() {
    let report = synthesize(&student(), &[memory_path(55)]).unwrap();

    assert_eq!(
        report.areas_for_development,
        vec!["Working Memory: Shows room for improvement with 55% accuracy".to_string()]
    );
    assert_eq!(
        report.strengths,
        vec!["Assessment shows developing skills across all domains".to_string()]
    );
    assert!(titles(&report).contains(&"Memory Strengthening Exercises"));
    assert!(!titles(&report).contains(&"Advanced Memory Challenges"));
}

#[test]
fn empty_results_produce_no_report() {
    let err = synthesize(&student(), &[]).unwrap_err();
    assert_eq!(err.code, "E1001");
    assert_eq!(err.kind, SynthesisErrorKind::NoMetricsAvailable);
    assert_eq!(err.student.as_deref(), Some("Asha"));
    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("E1001: "));
    assert!(err.to_string().contains("no metrics available"));
}

#[test]
fn mixed_scores_average_and_classification() {
    let results = [focus_tap(90), spot_difference(75), memory_path(55)];
    let report = synthesize(&student(), &results).unwrap();

    assert_eq!(report.average_score.get(), 73);
    assert_eq!(report.strengths.len(), 1);
    assert_eq!(report.areas_for_development.len(), 1);
    assert!(report.strengths[0].starts_with("Attention:"));
    assert!(report.areas_for_development[0].starts_with("Working Memory:"));
    assert!(!report
        .strengths
        .iter()
        .chain(&report.areas_for_development)
        .any(|l| l.starts_with("Visual Attention")));
}

#[test]
fn result_order_is_preserved() {
    let results = [memory_path(60), spot_difference(70), focus_tap(80)];
    let report = synthesize(&student(), &results).unwrap();

    let names: Vec<_> = report.detailed_scores.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Working Memory", "Visual Attention", "Attention"]);
    let analysed: Vec<_> = report
        .detailed_analysis
        .iter()
        .map(|a| a.domain.as_str())
        .collect();
    assert_eq!(analysed, names);
}

#[test]
fn next_steps_are_fixed() {
    for results in [vec![focus_tap(10)], vec![memory_path(100), spot_difference(0)]] {
        let report = synthesize(&student(), &results).unwrap();
        assert_eq!(report.next_steps, NEXT_STEPS.map(String::from).to_vec());
    }
    assert_eq!(NEXT_STEPS.len(), 5);
    assert_eq!(
        NEXT_STEPS[3],
        "Schedule follow-up assessment in 3-4 months to evaluate progress"
    );
}

#[test]
fn recommendations_follow_domain_rules() {
    let report = synthesize(
        &student(),
        &[focus_tap(50), memory_path(85), spot_difference(60)],
    )
    .unwrap();
    assert_eq!(
        titles(&report),
        [
            "Attention Enhancement Activities",
            "Advanced Memory Challenges",
            "Visual Discrimination Activities",
            "Regular Assessment & Monitoring",
            "Collaborative Approach",
        ]
    );

    // No counterpart for strong visual attention.
    let report = synthesize(&student(), &[spot_difference(95)]).unwrap();
    assert_eq!(
        titles(&report),
        ["Regular Assessment & Monitoring", "Collaborative Approach"]
    );

    assert_eq!(
        report.recommendations[0].description,
        "Schedule follow-up assessment in 3-4 months to track progress and adjust intervention strategies as needed."
    );
}

#[test]
fn memory_alias_and_first_match_wins() {
    let generic_memory = result("memory_path", "memory", 40, json!({}));
    let report = synthesize(&student(), &[generic_memory]).unwrap();
    assert!(titles(&report).contains(&"Memory Strengthening Exercises"));

    let report = synthesize(&student(), &[focus_tap(50), focus_tap(95)]).unwrap();
    let t = titles(&report);
    assert!(t.contains(&"Attention Enhancement Activities"));
    assert!(!t.contains(&"Maintain Attention Skills"));
}

#[test]
fn average_is_rounded_mean_for_many_inputs() {
    for a in (0..=100u8).step_by(7) {
        for b in (0..=100u8).step_by(11) {
            let scores = [a, b, 100 - a / 2];
            let results: Vec<_> = scores.iter().map(|&s| focus_tap(s)).collect();
            let report = synthesize(&student(), &results).unwrap();

            let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
            assert_eq!(report.average_score.get() as f64, mean.round());
            assert!(report.average_score.get() <= 100);
        }
    }

    // Exact halves round up.
    let report = synthesize(&student(), &[focus_tap(70), focus_tap(75)]).unwrap();
    assert_eq!(report.average_score.get(), 73);
}

#[test]
fn each_score_has_exactly_one_standing() {
    for v in 0..=100u8 {
        let report = synthesize(&student(), &[spot_difference(v)]).unwrap();
        let strength = !report.strengths[0].starts_with("Assessment shows");
        let gap = !report.areas_for_development[0].starts_with("Continue monitoring");

        assert!(!(strength && gap));
        assert_eq!(strength, v >= 80);
        assert_eq!(gap, v < 70);
        assert_eq!(
            Standing::of(Percent::new(v).unwrap()) == Standing::Unremarked,
            (70..80).contains(&v)
        );
    }
}

#[test]
fn synthesis_is_idempotent_with_fixed_clock() {
    let results = [focus_tap(88), spot_difference(62), memory_path(71)];
    let a = synthesize_with_options(&student(), &results, &fixed_options()).unwrap();
    let b = synthesize_with_options(&student(), &results, &fixed_options()).unwrap();
    assert_eq!(a, b);

    let c = synthesize(&student(), &results).unwrap();
    assert_eq!(a.executive_summary, c.executive_summary);
    assert_eq!(a.detailed_analysis, c.detailed_analysis);
    assert_eq!(a.recommendations, c.recommendations);
    assert_eq!(a.strengths, c.strengths);
    assert_eq!(a.areas_for_development, c.areas_for_development);
    assert_eq!(a.next_steps, c.next_steps);
}

#[test]
fn options_stamp_dates() {
    let opts = fixed_options();
    let report = synthesize_with_options(&student(), &[focus_tap(80)], &opts).unwrap();
    assert_eq!(Some(report.assessment_date), opts.assessment_date);
    assert_eq!(Some(report.generated_at), opts.generated_at);

    let report = synthesize_with_options(
        &student(),
        &[focus_tap(80)],
        &SynthesisOptions {
            assessment_date: None,
            ..opts.clone()
        },
    )
    .unwrap();
    assert_eq!(report.assessment_date, report.generated_at);
}

#[test]
fn domain_labels() {
    assert_eq!(domain_label(&Domain::Attention), "Attention");
    assert_eq!(domain_label(&Domain::WorkingMemory), "Working Memory");
    assert_eq!(domain_label(&Domain::VisualAttention), "Visual Attention");
    assert_eq!(domain_label(&Domain::ImpulseControl), "Impulse Control");
    assert_eq!(
        domain_label(&Domain::Other("auditory_sequence_memory".to_string())),
        "Auditory Sequence Memory"
    );
    assert_eq!(domain_label(&Domain::Other("x-ray".to_string())), "X-Ray");
}

#[test]
fn unknown_game_gets_only_generic_output() {
    let r = result(
        "rhythm_echo",
        "auditory_memory",
        65,
        json!({ "avgReaction": 700, "beats": 9 }),
    );
    let report = synthesize(&student(), &[r]).unwrap();

    let score = &report.detailed_scores[0];
    assert_eq!(score.name, "Auditory Memory");
    assert_eq!(score.game_used, "rhythm_echo");
    assert_eq!(
        score.metrics,
        vec![assessment_schema::Metric::new("Avg Reaction Time", "700ms")]
    );
    assert_eq!(
        report.detailed_analysis[0].observation,
        "Moderate performance in auditory memory. Additional practice recommended. "
    );
    assert_eq!(
        titles(&report),
        ["Regular Assessment & Monitoring", "Collaborative Approach"]
    );
}

#[test]
fn missing_counters_degrade_gracefully() {
    let r = result("focus_tap", "attention", 50, json!({}));
    let report = synthesize(&student(), &[r]).unwrap();

    let metrics = &report.detailed_scores[0].metrics;
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0].label, "Hits");
    assert_eq!(metrics[0].value, json!("/"));
    assert_eq!(metrics[1].value, Value::Null);
    assert_eq!(metrics[2].value, Value::Null);

    assert_eq!(
        report.detailed_analysis[0].observation,
        "Attention shows significant opportunity for development. Child achieved 0 successful taps out of 0 rounds."
    );
}

#[test]
fn premature_taps_are_mentioned() {
    let r = result(
        "focus_tap",
        "attention",
        75,
        json!({ "hits": 9, "misses": 2, "falseTaps": 3, "totalRounds": 12 }),
    );
    let report = synthesize(&student(), &[r]).unwrap();
    assert_eq!(
        report.detailed_analysis[0].observation,
        "Good performance in attention with minor areas for enhancement. Child achieved 9 successful taps out of 12 rounds, with 3 premature response(s)."
    );
}

#[test]
fn float_and_string_counters_read_like_counts() {
    let r = result(
        "focus_tap",
        "attention",
        75,
        json!({ "hits": 9.0, "misses": 0, "falseTaps": "2", "totalRounds": 12 }),
    );
    let report = synthesize(&student(), &[r]).unwrap();
    assert_eq!(
        report.detailed_analysis[0].observation,
        "Good performance in attention with minor areas for enhancement. Child achieved 9 successful taps out of 12 rounds, with 2 premature response(s)."
    );
    assert_eq!(report.detailed_scores[0].metrics[0].value, json!("9/12"));
}

#[test]
fn spot_and_memory_fact_sentences() {
    let report = synthesize(&student(), &[spot_difference(70), memory_path(62)]).unwrap();
    assert_eq!(
        report.detailed_analysis[0].observation,
        "Good performance in visual attention with minor areas for enhancement. Successfully identified differences in 7 out of 10 rounds."
    );
    assert_eq!(
        report.detailed_analysis[1].observation,
        "Moderate performance in working memory. Additional practice recommended. Recalled sequences up to 5 items, completing 4 rounds successfully."
    );
    assert_eq!(
        report.detailed_scores[1].metrics,
        vec![
            assessment_schema::Metric::new("Correct Rounds", "4/8"),
            assessment_schema::Metric::new("Max Sequence", 5),
        ]
    );
}

#[test]
fn executive_summary_wording() {
    let report = synthesize(&student(), &[focus_tap(85)]).unwrap();
    assert_eq!(
        report.executive_summary,
        "Asha, age 7, completed a comprehensive game-based cognitive assessment. \
         The child demonstrates excellent cognitive capabilities across all assessed domains, with an average performance of 85%. \
         Notable strengths include 1 domain(s) with excellent performance. \
         This assessment provides a snapshot of current cognitive functioning and should be interpreted within the broader context of the child's overall development."
    );

    let report = synthesize(&student(), &[focus_tap(90), spot_difference(75), memory_path(55)]).unwrap();
    assert!(report.executive_summary.contains(
        "The child shows good cognitive development with an average performance of 73%, with specific areas identified for continued growth. "
    ));
    assert!(report
        .executive_summary
        .contains("Notable strengths include 1 domain(s) with excellent performance. Development focus recommended in 1 area(s). "));

    let report = synthesize(&student(), &[memory_path(65)]).unwrap();
    assert!(report.executive_summary.contains(
        "The child displays moderate cognitive performance averaging 65%, with several areas benefiting from targeted interventions. Development focus recommended in 1 area(s). "
    ));
    assert!(!report.executive_summary.contains("Notable strengths"));

    let report = synthesize(&student(), &[spot_difference(72)]).unwrap();
    assert!(!report.executive_summary.contains("Notable strengths"));
    assert!(!report.executive_summary.contains("Development focus"));

    let report = synthesize(&student(), &[memory_path(30)]).unwrap();
    assert!(report.executive_summary.contains(
        "The child's assessment reveals significant opportunities for cognitive development, with an average performance of 30%. "
    ));
}

#[test]
fn presentation_band_is_independent_of_standing() {
    let report = synthesize(&student(), &[memory_path(65)]).unwrap();
    let score = &report.detailed_scores[0];
    assert_eq!(score.band(), PresentationBand::Amber);
    assert_eq!(Standing::of(score.score), Standing::Development);
    assert_eq!(PerformanceTier::of(score.score), PerformanceTier::Moderate);
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = synthesize_with_options(&student(), &[focus_tap(85)], &fixed_options()).unwrap();
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["studentName"], "Asha");
    assert_eq!(v["averageScore"], 85);
    assert!(v["executiveSummary"].is_string());
    assert_eq!(v["areasForDevelopment"].as_array().unwrap().len(), 1);
    assert_eq!(v["detailedScores"][0]["gameUsed"], "Focus Tap");
    assert_eq!(v["detailedScores"][0]["rawData"]["hits"], 12);
    assert_eq!(v["nextSteps"].as_array().unwrap().len(), 5);

    let back: Report = serde_json::from_value(v).unwrap();
    assert_eq!(back, report);
}

#[test]
fn record_reuses_stored_report_unless_regenerating() {
    let mut record = AssessmentRecord {
        student_name: "Asha".to_string(),
        student_age: 7,
        results: vec![focus_tap(85)],
        status: AssessmentStatus::GamesCompleted,
        completed_at: Some(Utc.with_ymd_and_hms(2026, 3, 1, 10, 20, 0).unwrap()),
        report: None,
    };

    let options = RecordOptions {
        synthesis: SynthesisOptions {
            assessment_date: None,
            ..fixed_options()
        },
        regenerate: false,
    };
    let first = generate_for_record(&record, &options).unwrap();
    assert_eq!(Some(first.assessment_date), record.completed_at);
    record.attach_report(first.clone());
    assert_eq!(record.status, AssessmentStatus::ReportGenerated);

    record.results = vec![focus_tap(40)];
    let reused = generate_for_record(&record, &options).unwrap();
    assert_eq!(reused, first);

    let fresh = generate_for_record(
        &record,
        &RecordOptions {
            regenerate: true,
            ..options
        },
    )
    .unwrap();
    assert_eq!(fresh.average_score.get(), 40);
}

#[test]
fn record_without_results_fails_with_context() {
    let record = AssessmentRecord {
        student_name: "Ravi".to_string(),
        student_age: 5,
        results: vec![],
        status: AssessmentStatus::GamesCompleted,
        completed_at: None,
        report: None,
    };
    let err = generate_for_record(&record, &RecordOptions::default()).unwrap_err();
    assert_eq!(err.kind, SynthesisErrorKind::NoMetricsAvailable);
    assert_eq!(err.context.as_deref(), Some("assessment record"));
}

#[test]
fn snapshot_takes_first_match_per_area() {
    let impulse = result("go_no_go", "impulse_control", 66, json!({}));
    let snap = learning_snapshot(&[
        spot_difference(61),
        focus_tap(82),
        focus_tap(20),
        impulse,
    ]);
    assert_eq!(snap.attention.map(Percent::get), Some(82));
    assert_eq!(snap.memory, None);
    assert_eq!(snap.processing.map(Percent::get), Some(61));
    assert_eq!(snap.impulse.map(Percent::get), Some(66));
}

#[test]
fn plan_scales_with_age() {
    let toddler = plan_for_age(3);
    assert_eq!(toddler.len(), 2);
    assert_eq!(toddler[0].name, "Tap the Star");
    assert_eq!(toddler[0].total_rounds, 8);
    assert_eq!(toddler[1].name, "Follow the Path");
    assert_eq!(toddler[1].start_sequence_length, Some(2));

    let five = plan_for_age(5);
    let ids: Vec<_> = five.iter().map(|g| g.game_id.as_str()).collect();
    assert_eq!(ids, ["focus_tap", "spot_difference", "memory_path"]);
    assert_eq!(
        five.iter().map(|g| g.total_rounds).collect::<Vec<_>>(),
        [12, 10, 8]
    );

    let nine = plan_for_age(9);
    assert_eq!(
        nine.iter().map(|g| g.total_rounds).collect::<Vec<_>>(),
        [16, 14, 10]
    );
    assert_eq!(nine[2].start_sequence_length, Some(4));
}

#[test]
fn finished_games_feed_the_synthesizer() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    let plan = plan_for_age(6);

    let tap = finish_game(
        &plan[0],
        &SessionTally::FocusTap {
            hits: 7,
            misses: 2,
            false_taps: 1,
            reaction_times_ms: vec![400, 451],
        },
        at,
    );
    assert_eq!(tap.accuracy.get(), 70);
    assert_eq!(tap.avg_reaction, 426);
    assert_eq!(tap.total_rounds, Some(12));
    assert_eq!(tap.counter("falseTaps"), Some(&json!(1)));

    let spot = finish_game(
        &plan[1],
        &SessionTally::SpotDifference {
            correct: 0,
            wrong: 10,
            reaction_times_ms: vec![],
        },
        at,
    );
    assert_eq!(spot.accuracy.get(), 0);
    assert_eq!(spot.avg_reaction, 0);
    assert_eq!(spot.domain, Domain::VisualAttention);

    let idle = finish_game(
        &plan[0],
        &SessionTally::FocusTap {
            hits: 0,
            misses: 0,
            false_taps: 0,
            reaction_times_ms: vec![],
        },
        at,
    );
    assert_eq!(idle.accuracy.get(), 0);

    let report = synthesize(&student(), &[tap, spot]).unwrap();
    assert_eq!(report.average_score.get(), 35);
    assert_eq!(report.detailed_scores[1].metrics[0].label, "Correct");
}

#[test]
fn young_players_get_fixed_game_names() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    let plan = plan_for_age(3);
    assert_eq!(plan[0].name, "Tap the Star");
    assert_eq!(plan[1].name, "Follow the Path");

    let tap = finish_game(
        &plan[0],
        &SessionTally::FocusTap {
            hits: 5,
            misses: 2,
            false_taps: 1,
            reaction_times_ms: vec![510],
        },
        at,
    );
    let path = finish_game(
        &plan[1],
        &SessionTally::MemoryPath {
            correct_rounds: 4,
            max_sequence_length: 3,
            reaction_times_ms: vec![],
        },
        at,
    );
    assert_eq!(tap.game_name.as_deref(), Some("Focus Tap"));

    let report = synthesize(&student(), &[tap, path]).unwrap();
    assert_eq!(report.detailed_scores[0].game_used, "Focus Tap");
    assert_eq!(report.detailed_scores[1].game_used, "Memory Path");
}

#[test]
fn extreme_tallies_saturate() {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    let plan = plan_for_age(8);

    let tap = finish_game(
        &plan[0],
        &SessionTally::FocusTap {
            hits: u32::MAX,
            misses: u32::MAX,
            false_taps: u32::MAX,
            reaction_times_ms: vec![u64::MAX, u64::MAX],
        },
        at,
    );
    assert_eq!(tap.accuracy.get(), 33);
    assert!(tap.avg_reaction > 0);

    assert_eq!(scoring::average_reaction(&[u64::MAX, 1]), scoring::average_reaction(&[u64::MAX, 0]));
    assert_eq!(scoring::average_reaction(&[300, 501]), 401);
}

#[test]
fn text_view_lists_every_section() {
    let report = synthesize_with_options(
        &student(),
        &[focus_tap(85), memory_path(55)],
        &fixed_options(),
    )
    .unwrap();
    let text = render_text(&report);

    assert!(text.starts_with("Learning Assessment Report\n"));
    assert!(text.contains("Assessment Date: 2026-03-01"));
    assert!(text.contains("  - Attention (Focus Tap): 85% [Excellent]"));
    assert!(text.contains("  - Working Memory (Memory Path): 55% [Needs Improvement]"));
    assert!(text.contains("      Hits: 12/16"));
    assert!(text.contains("  1. Maintain Attention Skills"));
    assert!(text.contains("  5. Consult with educational or developmental specialists if concerns persist"));
    assert!(text.ends_with(templates::DISCLAIMER));
}

#[test]
fn text_view_shows_placeholders_for_empty_lists() {
    let mut report = synthesize(&student(), &[focus_tap(75)]).unwrap();
    report.strengths.clear();
    report.recommendations.clear();
    report.next_steps.clear();

    let text = render_text(&report);
    assert!(text.contains(render::NO_STRENGTHS));
    assert!(text.contains(render::NO_RECOMMENDATIONS));
    assert!(text.contains(render::NO_NEXT_STEPS));
}
