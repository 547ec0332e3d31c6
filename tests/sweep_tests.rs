use std::fs;
use wordle_sweep::commands::{MissReason, SweepConfig, evaluate_pair, minimal_budget, run_sweep};
use wordle_sweep::core::Word;
use wordle_sweep::output::tables::{BUDGET_FILE, HISTOGRAM_FILE, MISSED_FILE, SUCCESSES_FILE};
use wordle_sweep::output::write_tables;
use wordle_sweep::solver::GuessCache;

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(w).unwrap()).collect()
}

fn test_words() -> Vec<Word> {
    words(&[
        "words", "wrong", "solid", "abide", "sword", "lumpy", "cabin", "fight", "crane", "slate",
        "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
}

#[test]
fn test_small_sweep_has_a_perfect_pair() {
    let list = words(&["words", "wrong", "solid", "abide"]);
    let report = run_sweep(&list, &SweepConfig::new(6).sequential());

    let small: Vec<_> = report
        .stats
        .iter()
        .filter(|s| s.cutoff <= 1 && s.search <= 1)
        .collect();
    assert_eq!(small.len(), 4);
    assert!(small.iter().any(|s| s.successes == list.len()));

    let plain = &report.stats[0];
    assert_eq!((plain.cutoff, plain.search), (0, 0));
    assert!(plain.solved_all());
    // "words" on turn 1, the rest are isolated by it
    assert_eq!(plain.histogram[..2], [1, 3]);
}

#[test]
fn test_parallel_matches_sequential() {
    let list = test_words();
    let sequential = run_sweep(&list, &SweepConfig::new(4).sequential());
    let parallel = run_sweep(&list, &SweepConfig::new(4));
    assert_eq!(sequential.stats, parallel.stats);
}

#[test]
fn test_cache_size_does_not_change_results() {
    let list = test_words();
    let uncached = run_sweep(&list, &SweepConfig::new(3).sequential().with_cache_capacity(0));
    let tiny = run_sweep(&list, &SweepConfig::new(3).sequential().with_cache_capacity(2));
    let default = run_sweep(&list, &SweepConfig::new(3).sequential());
    assert_eq!(uncached.stats, default.stats);
    assert_eq!(tiny.stats, default.stats);
}

#[test]
fn test_tight_budget_records_reasons_and_recovers() {
    let list = test_words();
    let stats = evaluate_pair(&list, 0, 0, 1, &mut GuessCache::default());

    assert_eq!(stats.successes, 1);
    assert_eq!(stats.missed.len(), list.len() - 1);
    assert!(stats.missed.iter().all(|miss| matches!(
        miss.reason,
        MissReason::TurnBudget | MissReason::SolvedLate(2)
    )));

    // Each group left after turn 1 has its own second guess, so budget 2 always helps
    assert!(stats.budget.turns >= 2);
    assert!(stats.budget.unsolved.len() < stats.missed.len());
    for word in &stats.budget.unsolved {
        assert!(stats.missed.iter().any(|miss| miss.word == *word));
    }
}

#[test]
fn test_minimal_budget_with_nothing_missed() {
    let list = test_words();
    let budget = minimal_budget(&list, &[], 2, 2, 6, &mut GuessCache::default());
    assert_eq!(budget.turns, 6);
    assert!(budget.unsolved.is_empty());
}

#[test]
fn test_tables_written_to_directory() {
    let list = words(&["words", "wrong", "solid", "abide"]);
    let report = run_sweep(&list, &SweepConfig::new(2).sequential());

    let dir = std::env::temp_dir().join(format!("wordle_sweep_tables_{}", std::process::id()));
    let written = write_tables(&dir, &report).unwrap();
    assert_eq!(written.len(), 4);

    let successes = fs::read_to_string(dir.join(SUCCESSES_FILE)).unwrap();
    assert_eq!(successes.lines().count(), report.stats.len());
    assert!(successes.starts_with("0,0,"));

    let histogram = fs::read_to_string(dir.join(HISTOGRAM_FILE)).unwrap();
    let first = histogram.lines().next().unwrap();
    // cutoff, search, turns 1..=2, overflow
    assert_eq!(first.split(',').count(), 5);

    assert!(dir.join(MISSED_FILE).exists());
    let budgets = fs::read_to_string(dir.join(BUDGET_FILE)).unwrap();
    assert!(budgets.lines().all(|line| line.split(',').count() == 3));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_budget_stalls_on_unreachable_secret() {
    let list = words(&["abcde", "fghij"]);
    // Not in the list: "abcde" scores 00000 and leaves "fghij", which is never the secret
    let outsider = Word::new("fghik").unwrap();
    let budget = minimal_budget(&list, &[outsider], 0, 0, 3, &mut GuessCache::default());
    assert_eq!(budget.turns, 3);
    assert_eq!(budget.unsolved, vec![outsider]);
}

#[test]
fn test_budget_reports_last_productive_step_before_stall() {
    let list = words(&["abcde", "fghij"]);
    let outsider = Word::new("fghik").unwrap();
    // With budget 1, "fghij" is isolated by turn 1 and reported as a turn 2 win
    let stats = evaluate_pair(&list, 0, 0, 1, &mut GuessCache::default());
    assert_eq!(stats.missed[0].reason, MissReason::SolvedLate(2));

    let budget = minimal_budget(&list, &[list[1], outsider], 0, 0, 1, &mut GuessCache::default());
    assert_eq!(budget.turns, 2);
    assert_eq!(budget.unsolved, vec![outsider]);
}
