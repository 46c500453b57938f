//! Prints all six orders for a handful of sample stores.

use std::fmt::Display;

use orderings::Store;
use orderings::Traversal;
use tracing_subscriber::EnvFilter;

fn print_all_orders<T: Clone + PartialOrd + Display>(
    name: &str,
    store: &Store<T>,
    label: &str,
) -> orderings::Result<()> {
    println!("{}: {}", name, store);
    println!("--- {} ---", label);
    println!("Size: {}", store.len());

    for order in Traversal::ALL {
        let values = store.collect(order)?;
        let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        println!("{}: {}", order.label(), line.join(" "));
    }
    println!();
    return Ok(());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("orderings=info".parse()?))
        .init();

    let odd: Store<i32> = [13, 2, 25, 8, 4].into_iter().collect();
    print_all_orders("Odd Container", &odd, "Odd-sized container [5 items]")?;

    let even: Store<i32> = [5, 11, 6, 9, 17, 3].into_iter().collect();
    print_all_orders("Even Container", &even, "Even-sized container [6 items]")?;

    let empty: Store<i32> = Store::new();
    print_all_orders("Empty Container", &empty, "Empty container [0 items]")?;

    let duplicates: Store<i32> = std::iter::repeat(21).take(5).collect();
    print_all_orders(
        "Duplicate Container",
        &duplicates,
        "Duplicate-elements container [5 identical items]",
    )?;

    let large: Store<i32> = (10..30).step_by(2).collect();
    print_all_orders("Large Container", &large, "Large container [10 elements, step by 2]")?;

    let mut removal: Store<i32> = [10, 20, 10].into_iter().collect();
    let removed = removal.remove_all(&10)?;
    tracing::info!(removed, "removed duplicates");
    if let Err(error) = removal.remove_all(&42) {
        tracing::info!(%error, "42 was never there");
    }
    print_all_orders("After Removal", &removal, "Removal [10 twice, then 42]")?;

    return Ok(());
}
