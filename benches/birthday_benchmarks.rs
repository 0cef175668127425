//! Performance benchmarks for the upcoming birthday query.
//!
//! These benchmarks measure lookups and birthday scans over books of
//! different sizes.

use address_book::{AddressBook, ContactRecord};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book of `size` contacts with birthdays spread across the year.
fn create_test_book(size: usize) -> AddressBook {
    (0..size)
        .map(|i| {
            let mut record = ContactRecord::new(format!("Contact {}", i)).unwrap();
            record.add_phone(format!("{:010}", i)).unwrap();
            let day = (i % 28) + 1;
            let month = (i % 12) + 1;
            record
                .set_birthday(&format!("{:02}.{:02}.1990", day, month))
                .unwrap();
            record
        })
        .collect()
}

/// Benchmark the birthday scan at different book sizes.
fn bench_upcoming_birthdays(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 12, 28).unwrap();
    let mut group = c.benchmark_group("upcoming_birthdays");

    for size in [10, 100, 1000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays_from(black_box(today), black_box(7)));
        });
    }

    group.finish();
}

/// Benchmark name lookup at the end of the book.
fn bench_find(c: &mut Criterion) {
    let book = create_test_book(1000);

    c.bench_function("find_last_of_1000", |b| {
        b.iter(|| book.find(black_box("Contact 999")));
    });
}

criterion_group!(benches, bench_upcoming_birthdays, bench_find);
criterion_main!(benches);
