use criterion::{black_box, criterion_group, criterion_main, Criterion};

use patzer::coretypes::{Color, Piece, PieceKind, Square};
use patzer::mailbox::Mailbox;
use patzer::movelist::MoveList;
use patzer::oracle::RulesOracle;
use patzer::search;

/// Synthetic rules oracle over an unbounded uniform game tree.
/// The path of move labels taken from the root fully determines the
/// board, so positions are derived on the fly instead of being stored.
struct UniformGame {
    branching: u32,
    path: Vec<u32>,
}

impl UniformGame {
    fn new(branching: u32) -> Self {
        UniformGame {
            branching,
            path: Vec::new(),
        }
    }

    fn path_key(&self) -> u32 {
        self.path
            .iter()
            .fold(0u32, |acc, mov| acc.wrapping_mul(31).wrapping_add(mov + 1))
    }
}

impl RulesOracle for UniformGame {
    type Move = u32;

    fn legal_moves(&self) -> MoveList<u32> {
        (0..self.branching).collect()
    }

    fn apply_move(&mut self, mov: u32) -> bool {
        if mov < self.branching {
            self.path.push(mov);
            true
        } else {
            false
        }
    }

    fn undo_move(&mut self) {
        self.path.pop();
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn side_to_move(&self) -> Color {
        if self.path.len() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    fn board(&self) -> Mailbox {
        let key = self.path_key();
        let mut mb = Mailbox::new();

        mb[Square::E1] = Some(Piece::new(Color::White, PieceKind::King));
        mb[Square::E8] = Some(Piece::new(Color::Black, PieceKind::King));
        for i in 0..(key % 8) as u8 {
            mb[Square::from_u8(8 + i).unwrap()] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        for i in 0..((key / 8) % 8) as u8 {
            mb[Square::from_u8(48 + i).unwrap()] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }

        mb
    }
}

pub fn criterion_uniform_branching_10(c: &mut Criterion) {
    // Setup
    let branching = 10;
    let ply = 4;

    // Benchmarks

    c.bench_function("uniform_branching_10_ply_4_alpha_beta", |b| {
        b.iter(|| {
            let mut game = UniformGame::new(black_box(branching));
            let result = search::alpha_beta(&mut game, black_box(ply)).unwrap();

            assert!(result.has_move());
            assert!(game.path.is_empty());
        })
    });
}

pub fn criterion_uniform_branching_20(c: &mut Criterion) {
    // Setup
    let branching = 20;
    let ply = 3;

    // Benchmarks

    c.bench_function("uniform_branching_20_ply_3_alpha_beta", |b| {
        b.iter(|| {
            let mut game = UniformGame::new(black_box(branching));
            let result = search::alpha_beta(&mut game, black_box(ply)).unwrap();

            assert!(result.has_move());
            assert!(game.path.is_empty());
        })
    });
}

criterion_group! {
    name = search_benches;
    config = Criterion::default().without_plots().sample_size(30);
    targets = criterion_uniform_branching_10, criterion_uniform_branching_20
}

criterion_main!(search_benches);
