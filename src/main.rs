use anyhow::{ensure, Context, Result};
use tracing::info;

use delta_sigma::{
    add, distinguish, from_count, is_even, is_zero, multiply, successor, Distinction,
    Numeral,
};

const RULE: &str = "============================================================";

fn banner(title: &str) {
    println!("\n{}", RULE);
    println!("{}", title);
    println!("{}", RULE);
}

fn basics() -> Result<()> {
    banner("Δ-Σ RECONSTRUCTION OF PEANO ARITHMETIC");

    println!("\n1. BUILDING NUMERALS:");
    for k in 0..5 {
        println!("  from_count({}) = {}", k, from_count(k)?);
    }

    let (a, b) = (from_count(2)?, from_count(3)?);

    println!("\n2. ADDITION (Δ-Σ DECOMPOSITION):");
    let sum = add(a.clone(), &b);
    println!("  {} + {} = {}", a, b, sum);
    println!("  check: 2 + 3 = {}", sum.reify());

    println!("\n3. MULTIPLICATION (Δ-Σ DECOMPOSITION):");
    let product = multiply(&a, &b);
    println!("  {} * {} = {}", a, b, product);
    println!("  check: 2 * 3 = {}", product.reify());

    println!("\n4. PREDICATES (PURE Δ):");
    for k in 0..4 {
        let n = from_count(k)?;
        println!("  is_zero({}) = {} | is_even({}) = {}", k, is_zero(&n), k, is_even(&n));
    }
    Ok(())
}

fn trace_addition(a: &Numeral, b: &Numeral) {
    banner("RECURSIVE STRUCTURE OF ADDITION");
    println!("\nTrace of {} + {}:", a.reify(), b.reify());

    let levels: Vec<&Numeral> = b.levels().collect();
    for (depth, rest) in levels.iter().enumerate() {
        let indent = "  ".repeat(depth);
        println!("{}add({}, {}) [depth: {}]", indent, a, rest, depth);
        match distinguish(rest) {
            Distinction::Base => println!("{}Δ: base case -> {}", indent, a),
            Distinction::Inductive(_) => {
                println!("{}Δ: inductive case -> recurse", indent);
                println!("{}Σ: apply successor to the result", indent);
            }
        }
    }
    // Unwind: every level above the base one wraps the result below it in one more successor.
    let mut total = a.clone();
    for depth in (0..levels.len() - 1).rev() {
        total = successor(total);
        println!("{}result at depth {}: {}", "  ".repeat(depth), depth, total);
    }

    println!("\nTotal: {} + {} = {} = {}", a, b, total, total.reify());
}

fn structural_analysis() -> Result<()> {
    banner("STRUCTURAL ANALYSIS THROUGH Δ");
    for k in 0..4 {
        let n = from_count(k)?;
        match distinguish(&n) {
            Distinction::Base => println!("Δ({} = {}) -> Base (Z, the base case)", k, n),
            Distinction::Inductive(pred) => {
                println!("Δ({} = {}) -> Inductive (S, the inductive case)", k, n);
                match distinguish(pred) {
                    Distinction::Base => println!("  Δ({}) -> Base (predecessor is Z)", pred),
                    Distinction::Inductive(_) => println!("  Δ({}) -> Inductive (predecessor is S)", pred),
                }
            }
        }
    }
    Ok(())
}

fn verify() -> Result<()> {
    let (two, three) = (from_count(2)?, from_count(3)?);
    ensure!(add(two.clone(), &three) == from_count(5)?, "2 + 3 did not reduce to 5");
    ensure!(multiply(&two, &three) == from_count(6)?, "2 * 3 did not reduce to 6");
    ensure!(is_zero(&from_count(0)?) && !is_zero(&three), "is_zero disagrees with from_count");

    banner("CONCLUSIONS");
    println!("  1. Δ separates the two cases: Δ(Z) -> Base, Δ(S(n)) -> Inductive.");
    println!("  2. Addition is Δ-branching plus Σ(successor); multiplication iterates addition.");
    println!("  3. Remove Δ and nothing can branch; remove Σ and nothing can be built.");
    println!("  4. Checked: 2 + 3 = 5, 2 * 3 = 6, is_zero holds only for Z.");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("running the Δ-Σ demonstration");

    basics().context("basic demonstration failed")?;
    let (two, three) = (from_count(2)?, from_count(3)?);
    trace_addition(&two, &three);
    structural_analysis().context("structural analysis failed")?;
    verify().context("verification failed")?;

    info!("demonstration complete");
    Ok(())
}
