//! Wraps a list of numbers and a list of records, then prints the first,
//! last and middle elements of each.
//!
//! Run with `cargo run -p linq-seq --example basic`.

use linq_seq::Sequence;

#[derive(Debug, Clone, Default)]
struct Record {
    #[allow(dead_code)]
    n: i32,
}

fn main() {
    let numbers = Sequence::from(vec![1, 2, 3, 4, 5]);
    println!("{}", numbers.must_first());
    println!("{}", numbers.must_last());
    println!("{}", numbers.must_at(2));

    let records: Sequence<Record> = (1..=5).map(|n| Record { n }).collect();
    println!("{:?}", records.must_first());
    println!("{:?}", records.must_last());
    println!("{:?}", records.must_at(2));

    let evens = numbers.filter(|v, _| v % 2 == 0);
    println!("evens: {:?}", evens.to_vec());
    println!("average: {}", numbers.average(|v, _| *v as f64));
}
