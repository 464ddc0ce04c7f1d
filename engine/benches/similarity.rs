// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommend.
//
// recommend is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommend is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommend.  If not, see <http://www.gnu.org/licenses/>.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use engine::{RatingMatrix, SimilarityComputer};
use rand::{thread_rng, Rng};

fn generate_ratings(items: usize, users: usize) -> RatingMatrix {
    let mut rng = thread_rng();

    let item_ids: Vec<_> = (0..items).map(|i| format!("item{}", i)).collect();
    let user_ids: Vec<_> = (0..users).map(|u| format!("user{}", u)).collect();
    let mut matrix = RatingMatrix::new(item_ids.clone(), user_ids.clone());

    for item in &item_ids {
        for user in &user_ids {
            // Leave roughly 70% of the cells unrated
            if rng.gen_bool(0.3) {
                let score = rng.gen_range(1, 6) as f64;
                matrix
                    .set(item, user, score)
                    .expect("Generated rating should be valid");
            }
        }
    }

    matrix
}

fn user_table_100(c: &mut Criterion) {
    let matrix = generate_ratings(1000, 100);
    let computer = SimilarityComputer::default();

    c.bench_function("user similarity 100", |bench| {
        bench.iter(|| {
            computer.table(
                black_box(matrix.users()),
                black_box(&matrix.user_vectors()),
            )
        })
    });
}

fn user_table_1000(c: &mut Criterion) {
    let matrix = generate_ratings(1000, 1000);
    let computer = SimilarityComputer::default();

    c.bench_function("user similarity 1000", |bench| {
        bench.iter(|| {
            computer.table(
                black_box(matrix.users()),
                black_box(&matrix.user_vectors()),
            )
        })
    });
}

criterion_group! {
    name = similarity_100;
    config = Criterion::default();
    targets = user_table_100
}

criterion_group! {
    name = similarity_1000;
    config = Criterion::default().sample_size(10);
    targets = user_table_1000
}

criterion_main!(similarity_100, similarity_1000);
