use bimrank::{report, Engine, Error, Tokenizer, Verdict};

fn main() -> anyhow::Result<()> {
    println!("=== bimrank Basic Usage Example ===\n");

    let engine = Engine::default();

    let documents = [
        ("Document1", "El gato come pescado"),
        ("Document2", "El perro come carne"),
        ("Document3", "Un pájaro vuela alto"),
        ("Document4", "La ballena nada lejos"),
    ];

    // Example 1: full report
    println!("--- Example 1: Query 'gato come' ---\n");
    let result = engine.run(documents, "gato come")?;
    print!("{}", result);

    // Example 2: a query that matches nothing
    println!("\n--- Example 2: Query 'tortuga' ---");
    let result = engine.run(documents, "tortuga")?;
    assert_eq!(result.verdict, Verdict::NoRelevantDocument);
    println!("{}", report::verdict_message(&result.verdict));

    // Example 3: a term in every document has no defined weight
    println!("\n--- Example 3: Two documents sharing 'come' ---");
    match engine.run(documents[..2].iter().copied(), "gato") {
        Err(Error::UndefinedWeight { term, .. }) => println!("Undefined weight for '{}'", term),
        other => println!("Unexpected outcome: {:?}", other.map(|r| r.verdict)),
    }

    // Example 4: custom stop words
    println!("\n--- Example 4: English stop words ---");
    let engine = Engine::new(Tokenizer::with_stopwords(["the", "a", "and"]));
    let result = engine.run(
        [
            ("Doc1", "the cat eats fish"),
            ("Doc2", "a dog eats meat"),
            ("Doc3", "the bird and the sky"),
        ],
        "cat fish",
    )?;
    println!("{}", report::verdict_message(&result.verdict));

    Ok(())
}
