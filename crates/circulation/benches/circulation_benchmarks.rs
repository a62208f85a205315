use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use shelfmark_catalog::{Book, BookStatus, Reader, ReaderKind, ReaderStatus};
use shelfmark_circulation::{CirculationStore, views};
use shelfmark_core::{BookId, ReaderId};

fn sample_book(n: usize) -> Book {
    Book {
        id: BookId::new(),
        title: format!("Book {n}"),
        author: "Anonymous".to_string(),
        isbn: "0000000000000".to_string(),
        category: format!("Category {}", n % 8),
        publisher: "Bench Press".to_string(),
        publish_date: "2020-01".to_string(),
        status: BookStatus::Available,
        location: format!("X-{n:03}"),
        cover_url: String::new(),
        description: None,
        price: 10.0,
    }
}

fn sample_reader() -> Reader {
    Reader {
        id: ReaderId::new(),
        name: "Bench Reader".to_string(),
        kind: ReaderKind::Student,
        email: "bench@example.com".to_string(),
        phone: "13800138000".to_string(),
        registered_date: Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap().date_naive(),
        avatar_url: String::new(),
        status: ReaderStatus::Active,
    }
}

fn bench_borrow_return_cycle(c: &mut Criterion) {
    c.bench_function("borrow_return_cycle", |b| {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut store = CirculationStore::new();
        let book = sample_book(0);
        let book_id = book.id;
        let reader = sample_reader();
        let reader_id = reader.id;
        store.add_book(book, now).unwrap();
        store.register_reader(reader, now).unwrap();

        b.iter(|| {
            let loan_id = store.borrow_book(book_id, reader_id, now).unwrap();
            store.return_book(black_box(loan_id), now).unwrap();
        });
    });
}

fn bench_dashboard_views(c: &mut Criterion) {
    c.bench_function("library_stats_1k_books", |b| {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut store = CirculationStore::new();
        for n in 0..1_000 {
            store.add_book(sample_book(n), now).unwrap();
        }

        let today = now.date_naive();
        b.iter(|| {
            black_box(views::library_stats(&store, today));
            black_box(views::category_histogram(&store));
        });
    });
}

criterion_group!(benches, bench_borrow_return_cycle, bench_dashboard_views);
criterion_main!(benches);
