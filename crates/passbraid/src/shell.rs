use app::{AppContext, Application};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use composer::{CompositionList, Field, FieldKind};
use session::SessionStore;

use crate::cli::{Cmd, KindArg};

const TIPS: &str = "\
Words fields
  Add one candidate per line (`set <index> --word summer --word winter`).
  Lines are trimmed and blank lines are skipped when generating; one
  line is picked at random per password.

Digits fields
  Produce a run of 1-100 random digits (`set <index> --count 4`).

Characters fields
  Produce a run of 1-100 random symbols from ! # _ - & %.

The arrangement is saved on exit and restored on the next start.";

impl From<KindArg> for FieldKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Words => FieldKind::Words,
            KindArg::Digits => FieldKind::Digits,
            KindArg::Characters => FieldKind::Characters,
        }
    }
}

/// The presentation shell around the headless core: loads the session at
/// startup, applies one command, saves the session at shutdown.
pub struct Shell {
    store: SessionStore,
    composition: CompositionList,
    _context: AppContext,
}

impl Application for Shell {
    const APP_ID: &'static str = "passbraid";
}

impl Shell {
    pub fn new(context: AppContext) -> Self {
        let store = SessionStore::new(context.path_context().session_file());
        let composition = store.load();
        Self {
            store,
            composition,
            _context: context,
        }
    }

    pub fn run(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Generate { count } => self.generate(count),
            Cmd::Add { kind } => self.add(kind.into()),
            Cmd::Set {
                index,
                words,
                count,
            } => self.set(index, words, count)?,
            Cmd::Remove { index } => self.remove(index)?,
            Cmd::Show => self.show(),
            Cmd::Tips => println!("{TIPS}"),
        }

        self.store.save(&self.composition)?;
        tracing::info!("session saved to {:?}", self.store.file_path());
        Ok(())
    }

    fn generate(&self, count: u32) {
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            println!("{}", self.composition.compose(&mut rng));
        }
    }

    fn add(&mut self, kind: FieldKind) {
        self.composition.push(Field::new(kind));
        println!(
            "added {kind} field at index {}",
            self.composition.len() - 1
        );
    }

    fn set(&mut self, index: usize, words: Vec<String>, count: Option<u32>) -> Result<()> {
        let field = self
            .composition
            .get_mut(index)
            .ok_or_else(|| eyre!("no field at index {index}"))?;

        match (field, words.is_empty(), count) {
            (Field::Words(f), false, None) => {
                f.set_text(words.join("\n"));
                println!("updated words field {index} ({} candidates)", words.len());
            }
            (Field::Digits(f), true, Some(count)) => {
                f.set_count(count);
                println!("updated digits field {index} (count {count})");
            }
            (Field::Characters(f), true, Some(count)) => {
                f.set_count(count);
                println!("updated characters field {index} (count {count})");
            }
            (field, _, _) => {
                return Err(eyre!(
                    "field {index} is a {} field; pass --word for words fields, --count for the others",
                    field.kind()
                ));
            }
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<()> {
        let removed = self.composition.remove(index)?;
        println!("removed {} field from index {index}", removed.kind());
        Ok(())
    }

    fn show(&self) {
        if self.composition.is_empty() {
            println!("(empty arrangement)");
            return;
        }
        for (index, field) in self.composition.iter().enumerate() {
            match field {
                Field::Words(f) => {
                    let candidates = f.candidates();
                    println!("{index}: words ({} candidates)", candidates.len());
                    for word in candidates {
                        println!("     - {word}");
                    }
                }
                Field::Digits(f) => println!("{index}: digits (count {})", f.count()),
                Field::Characters(f) => println!("{index}: characters (count {})", f.count()),
            }
        }
    }
}
