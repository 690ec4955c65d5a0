use tiny_lisp_front::{parse, tokenize};

fn main() {
    let source = "(add 100 (subtract 200 3000))";

    println!("=== Front End Demo ===\n");
    println!("Source code:\n{}\n", source);

    // Tokenize
    let tokens = match tokenize(source) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Lexer error: {}", e);
            return;
        }
    };

    println!("Tokens: {} generated", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        println!("  {}: {} at line {}, column {}", i, token, token.line, token.column);
    }

    // Parse
    match parse(tokens) {
        Ok(program) => {
            println!("\n✓ Parse successful!\n");
            println!("AST structure:");
            println!("{:#?}\n", program);
            match program.to_json() {
                Ok(json) => println!("JSON:\n{}", json),
                Err(e) => eprintln!("JSON error: {}", e),
            }
        }
        Err(e) => {
            eprintln!("✗ Parse error: {}", e);
        }
    }
}
