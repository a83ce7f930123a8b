use lexiday::leaderboard::{load_records, load_records_from_file, rank, PlayerRecord};
use lexiday::scorer::{Scorer, StatSpan};
use lexiday::{LexidayError, WordList};
use std::fs;
use std::io::Cursor;

// --- WORD LISTS ---
#[test]
fn test_word_list_normalizes_and_skips() {
    let data = "# answers\nKalem\n\n  sonik  \n# comment\nBULUT\n";
    let words = WordList::from_reader(Cursor::new(data)).unwrap();
    assert_eq!(words.len(), 3);
    assert_eq!(words.as_slice(), &["kalem", "sonik", "bulut"]);
    assert_eq!(words.get(1), Some("sonik"));
    assert_eq!(words.get(3), None);
    assert_eq!(&words[2], "bulut");
}

#[test]
fn test_word_list_keeps_non_ascii() {
    let words = WordList::from_reader(Cursor::new("şeker\nçiçek\nGÜNEŞ\n")).unwrap();
    assert_eq!(words.as_slice(), &["şeker", "çiçek", "güneş"]);
}

#[test]
fn test_empty_word_list_is_rejected() {
    assert!(matches!(
        WordList::from_reader(Cursor::new("# nothing here\n\n")),
        Err(LexidayError::EmptyWordList)
    ));
    assert!(matches!(
        WordList::new(Vec::new()),
        Err(LexidayError::EmptyWordList)
    ));
    assert!(WordList::try_from(vec!["kalem".to_string()]).is_ok());
}

#[test]
fn test_word_list_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.txt");
    fs::write(&path, "kalem\nsonik\n").unwrap();
    let words = WordList::load_from_file(&path).unwrap();
    assert_eq!(words.iter().collect::<Vec<_>>(), vec!["kalem", "sonik"]);

    let missing = WordList::load_from_file(dir.path().join("missing.txt"));
    assert!(matches!(missing, Err(LexidayError::Config(_))));
}

#[test]
fn test_shipped_answer_list_loads() {
    let words = WordList::load_from_file("data/answers.txt").unwrap();
    assert!(!words.is_empty());
    assert!(words.iter().all(|w| w.chars().count() == 5));
}

// --- PLAYER RECORDS ---
const PLAYERS: &str = "\
name,games_played,guess_score,success_ratio,speed_score
ayla, 42, 3, 92.5, 110
burak,10,1,100,0
cem,1,2,100,45
deniz,0,1,100,0
ece,120,4,75,180
";

#[test]
fn test_load_records() {
    let records = load_records(Cursor::new(PLAYERS)).unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(
        records[0],
        PlayerRecord {
            name: "ayla".to_string(),
            games_played: 42,
            guess_score: 3,
            success_ratio: 92.5,
            speed_score: 110.0,
        }
    );
}

#[test]
fn test_load_records_rejects_bad_rows() {
    let data = "name,games_played,guess_score,success_ratio,speed_score\nx,-3,1,1,1\n";
    assert!(matches!(
        load_records(Cursor::new(data)),
        Err(LexidayError::Csv(_))
    ));
}

#[test]
fn test_rank_orders_best_first() {
    let records = load_records(Cursor::new(PLAYERS)).unwrap();
    let ranked = rank(&Scorer::default(), &records, StatSpan::AllTime);

    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ayla", "burak", "ece", "cem", "deniz"]);
    let scores: Vec<i64> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![532, 521, 467, 13, 0]);
    assert_eq!(ranked[0].rank, 1);
    assert_eq!(ranked[4].rank, 5);
}

#[test]
fn test_rank_ties_share_a_rank() {
    let rec = |name: &str| PlayerRecord {
        name: name.to_string(),
        games_played: 10,
        guess_score: 1,
        success_ratio: 100.0,
        speed_score: 0.0,
    };
    let mut records = vec![rec("zeki"), rec("ali"), rec("mert")];
    records[2].games_played = 1;

    let ranked = rank(&Scorer::default(), &records, StatSpan::AllTime);
    assert_eq!(ranked[0].name, "ali");
    assert_eq!(ranked[1].name, "zeki");
    assert_eq!((ranked[0].rank, ranked[1].rank, ranked[2].rank), (1, 1, 3));
}

#[test]
fn test_rank_from_file_windowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.csv");
    fs::write(&path, PLAYERS).unwrap();

    let records = load_records_from_file(&path).unwrap();
    let ranked = rank(&Scorer::default(), &records, StatSpan::Windowed(7));
    // Windowed saturates at 3 games, so burak and ayla only differ by base score
    assert_eq!(ranked[0].name, "burak");
    assert_eq!(ranked[0].score, 239);
}
