//! A structure-of-arrays with stable handles
//!
//! Names and scores live in two packed columns. Handles survive removals and a
//! sort by score.

use std::cmp::Ordering;

use spaced_index::{handle::Handle, index::SpacedIndex, sort::Sortable};

#[derive(Default)]
struct Scoreboard {
    index: SpacedIndex,
    names: Vec<&'static str>,
    scores: Vec<u32>,
}

impl Scoreboard {
    fn add(&mut self, name: &'static str, score: u32) -> Handle {
        self.names.push(name);
        self.scores.push(score);
        self.index.add()
    }

    fn remove(&mut self, player: Handle) {
        let slot = self.index.remove(player);
        self.names.swap_remove(slot);
        self.scores.swap_remove(slot);
    }

    fn score(&self, player: Handle) -> u32 {
        self.scores[self.index.slot(player)]
    }

    fn rank(&mut self) {
        let mut columns = Columns {
            names: &mut self.names,
            scores: &mut self.scores,
        };
        self.index.sorter(&mut columns).sort();
    }
}

struct Columns<'a> {
    names: &'a mut [&'static str],
    scores: &'a mut [u32],
}

impl Sortable for Columns<'_> {
    fn len(&self) -> usize {
        self.scores.len()
    }

    // highest score first
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.scores[j].cmp(&self.scores[i])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.names.swap(i, j);
        self.scores.swap(i, j);
    }
}

fn main() {
    let mut board = Scoreboard::default();
    board.index.init();

    let ada = board.add("ada", 31);
    let bob = board.add("bob", 12);
    let cy = board.add("cy", 48);
    let dee = board.add("dee", 25);

    board.remove(bob);
    board.rank();

    for (rank, (name, score)) in board.names.iter().zip(&board.scores).enumerate() {
        println!("{}. {name} ({score})", rank + 1);
    }

    assert_eq!(board.names, ["cy", "ada", "dee"]);
    assert_eq!(board.score(ada), 31);
    assert_eq!(board.score(cy), 48);
    assert_eq!(board.score(dee), 25);
}
