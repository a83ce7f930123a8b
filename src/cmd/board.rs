use crate::reports;
use clap::Args;
use lexiday::board::{all_messages, word_to_board, CannedMessage, LetterState};
use lexiday::LexResult;

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Canned message board (e.g. `connecting`, `enter-your-name`)
    #[arg(short, long, conflicts_with = "word")]
    pub message: Option<CannedMessage>,

    /// Spell an arbitrary word as a one-row board
    #[arg(short, long)]
    pub word: Option<String>,

    /// State for every square of `--word`
    #[arg(short, long, default_value = "correct")]
    pub state: LetterState,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &BoardArgs) -> LexResult<()> {
    let boards = match (&args.word, args.message) {
        (Some(word), _) => vec![(word.clone(), word_to_board(word, args.state))],
        (None, Some(message)) => vec![(message.to_string(), message.board())],
        (None, None) => all_messages()
            .into_iter()
            .map(|(m, b)| (m.to_string(), b))
            .collect(),
    };

    for (name, board) in &boards {
        if args.json {
            println!("{}", serde_json::to_string(board)?);
        } else {
            reports::print_board_grid(name, board);
        }
    }
    Ok(())
}
