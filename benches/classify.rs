use acquire_engine::board::{Board, Hotel};
use acquire_engine::core::{HotelName, PlayerId, Tile};
use acquire_engine::rules::{classify, plan_merge};
use acquire_engine::{BonusSchedule, RulesConfig, Setup};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn row_hotel(name: HotelName, row: char, columns: std::ops::RangeInclusive<u8>) -> Hotel {
    let tiles = columns.map(|c| Tile::new(row, c).unwrap());
    let mut hotel = Hotel::new(name, tiles).unwrap();
    hotel.issue(PlayerId::new(0), 3).unwrap();
    hotel.issue(PlayerId::new(1), 2).unwrap();
    hotel
}

/// Four hotels on alternating rows with scattered singles between them.
fn busy_board() -> Board {
    let mut board = Board::new();
    board.add_hotel(row_hotel(HotelName::Tower, 'A', 1..=10)).unwrap();
    board.add_hotel(row_hotel(HotelName::American, 'C', 1..=6)).unwrap();
    board.add_hotel(row_hotel(HotelName::Festival, 'E', 3..=12)).unwrap();
    board.add_hotel(row_hotel(HotelName::Sackson, 'G', 1..=4)).unwrap();
    for label in ["I1", "I3", "I5", "I7", "H9", "G11"] {
        board.add_single(label.parse().unwrap()).unwrap();
    }
    board
}

fn bench_classify_all_tiles(c: &mut Criterion) {
    let board = busy_board();
    c.bench_function("classify_108_tiles", |b| {
        b.iter(|| {
            for tile in Tile::all() {
                black_box(classify(&board, tile));
            }
        });
    });
}

fn bench_plan_merge(c: &mut Criterion) {
    let board = busy_board();
    let tile: Tile = "B4".parse().unwrap();
    let bonus = BonusSchedule::default();
    c.bench_function("plan_two_way_merge", |b| {
        b.iter(|| plan_merge(&board, black_box(tile), HotelName::Tower, &bonus).unwrap());
    });
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup_six_players", |b| {
        b.iter(|| {
            Setup::new(["a", "b", "c", "d", "e", "f"])
                .build(RulesConfig::default(), black_box(42))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_classify_all_tiles, bench_plan_merge, bench_setup);
criterion_main!(benches);
