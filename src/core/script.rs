use crate::core::{NaturalOrder, StringSeq, Uppercase};
use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

/// 操作的另一個序列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Other1,
    Other2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    RemoveAt(usize),
    RemoveIfStartsWith(String),
    Clear,
    Push(String),
    Insert(usize, String),
    PushAll(Operand),
    InsertAll(usize, Operand),
    RemoveAll(Operand),
    UppercaseAll,
    Set(usize, String),
    RemoveFirst(String),
    SortNatural,
    RetainAll(Operand),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::RemoveAt(i) => write!(f, "remove_at({})", i),
            Step::RemoveIfStartsWith(p) => write!(f, "remove_if(starts_with {:?})", p),
            Step::Clear => write!(f, "clear()"),
            Step::Push(v) => write!(f, "push({:?})", v),
            Step::Insert(i, v) => write!(f, "insert({}, {:?})", i, v),
            Step::PushAll(o) => write!(f, "push_all({:?})", o),
            Step::InsertAll(i, o) => write!(f, "insert_all({}, {:?})", i, o),
            Step::RemoveAll(o) => write!(f, "remove_all({:?})", o),
            Step::UppercaseAll => write!(f, "replace_all(uppercase)"),
            Step::Set(i, v) => write!(f, "set({}, {:?})", i, v),
            Step::RemoveFirst(v) => write!(f, "remove_first({:?})", v),
            Step::SortNatural => write!(f, "sort(natural)"),
            Step::RetainAll(o) => write!(f, "retain_all({:?})", o),
        }
    }
}

/// A group of steps followed by one print of `pets`.
pub type Batch = Vec<Step>;

#[derive(Debug, Clone)]
pub struct Script {
    pub pets: StringSeq,
    pub other1: StringSeq,
    pub other2: StringSeq,
    pub batches: Vec<Batch>,
}

impl Script {
    /// 示範劇本：八個輸出點
    pub fn demo() -> Self {
        Self {
            pets: ["cat", "canary", "dog", "fish"].into_iter().collect(),
            other1: ["gerbil", "iguana", "fish"].into_iter().collect(),
            other2: ["kangaroo", "gerbil", "fish"].into_iter().collect(),
            batches: vec![
                vec![Step::RemoveAt(2)],
                vec![Step::RemoveIfStartsWith("c".to_string())],
                vec![Step::Clear],
                vec![
                    Step::Push("kangaroo".to_string()),
                    Step::Insert(0, "koala".to_string()),
                ],
                vec![Step::PushAll(Operand::Other1), Step::InsertAll(1, Operand::Other1)],
                vec![
                    Step::RemoveAll(Operand::Other2),
                    Step::UppercaseAll,
                    Step::Set(1, "zebra".to_string()),
                    Step::RemoveFirst("fish".to_string()),
                ],
                vec![Step::SortNatural],
                vec![Step::RetainAll(Operand::Other1)],
            ],
        }
    }

    fn operand(&self, operand: Operand) -> &StringSeq {
        match operand {
            Operand::Other1 => &self.other1,
            Operand::Other2 => &self.other2,
        }
    }

    fn apply(&self, pets: &mut StringSeq, step: &Step) -> Result<()> {
        match step {
            Step::RemoveAt(index) => {
                pets.remove_at(*index)?;
            }
            Step::RemoveIfStartsWith(prefix) => {
                pets.remove_if(|p| p.starts_with(prefix.as_str()));
            }
            Step::Clear => pets.clear(),
            Step::Push(value) => pets.push(value.as_str()),
            Step::Insert(index, value) => pets.insert(*index, value.as_str())?,
            Step::PushAll(operand) => pets.push_all(self.operand(*operand)),
            Step::InsertAll(index, operand) => pets.insert_all(*index, self.operand(*operand))?,
            Step::RemoveAll(operand) => {
                pets.remove_all(self.operand(*operand));
            }
            Step::UppercaseAll => pets.replace_all(&Uppercase),
            Step::Set(index, value) => {
                pets.set(*index, value.as_str())?;
            }
            Step::RemoveFirst(value) => {
                pets.remove_first(value);
            }
            Step::SortNatural => pets.sort_by(&NaturalOrder),
            Step::RetainAll(operand) => {
                pets.retain_all(self.operand(*operand));
            }
        }
        Ok(())
    }
}

pub struct ScriptEngine<W: Write> {
    script: Script,
    out: W,
}

impl<W: Write> ScriptEngine<W> {
    pub fn new(script: Script, out: W) -> Self {
        Self { script, out }
    }

    /// 依序執行每個批次，每批結束後輸出 `pets = [...]`，回傳每次輸出的快照
    pub fn run(&mut self) -> Result<Vec<StringSeq>> {
        tracing::info!("Running script with {} batches", self.script.batches.len());

        let mut pets = self.script.pets.clone();
        let mut snapshots = Vec::with_capacity(self.script.batches.len());

        for (n, batch) in self.script.batches.iter().enumerate() {
            for step in batch {
                tracing::debug!("batch {}: {}", n + 1, step);
                self.script.apply(&mut pets, step)?;
            }
            writeln!(self.out, "pets = {}", pets)?;
            snapshots.push(pets.clone());
        }

        self.out.flush()?;
        tracing::info!("Script finished, {} elements remain", pets.len());
        Ok(snapshots)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SeqError;

    fn seq(items: &[&str]) -> StringSeq {
        items.iter().copied().collect()
    }

    #[test]
    fn test_demo_snapshots() {
        let mut engine = ScriptEngine::new(Script::demo(), Vec::new());
        let snapshots = engine.run().unwrap();

        assert_eq!(snapshots.len(), 8);
        assert_eq!(snapshots[0], seq(&["cat", "canary", "fish"]));
        assert_eq!(snapshots[1], seq(&["fish"]));
        assert!(snapshots[2].is_empty());
        assert_eq!(snapshots[3], seq(&["koala", "kangaroo"]));
        assert_eq!(
            snapshots[4],
            seq(&["koala", "gerbil", "iguana", "fish", "kangaroo", "gerbil", "iguana", "fish"])
        );
        assert_eq!(snapshots[5], seq(&["KOALA", "zebra", "IGUANA"]));
        assert_eq!(snapshots[6], seq(&["IGUANA", "KOALA", "zebra"]));
        assert!(snapshots[7].is_empty());
    }

    #[test]
    fn test_out_of_range_step_stops_script() {
        let mut script = Script::demo();
        script.batches = vec![vec![Step::Clear], vec![Step::Set(0, "yak".to_string())]];

        let mut engine = ScriptEngine::new(script, Vec::new());
        let err = engine.run().unwrap_err();
        assert!(matches!(err, SeqError::IndexOutOfBounds { op: "set", index: 0, len: 0 }));

        // 失敗前的批次已輸出
        let output = String::from_utf8(engine.into_output()).unwrap();
        assert_eq!(output, "pets = []\n");
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::InsertAll(1, Operand::Other1).to_string(), "insert_all(1, Other1)");
        assert_eq!(Step::Push("koala".into()).to_string(), "push(\"koala\")");
    }
}
