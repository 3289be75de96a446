//! Minimal usage demo: compile a handful of patterns and match inputs.

fn main() {
    let cases = [
        ("a.c", "abc"),
        ("a.c", "axc"),
        ("abc", "def"),
        ("*a", ""),
        ("+a", ""),
        ("?a*b+c", "abc"),
    ];

    for (pattern, input) in cases {
        let re = rematch::compile(pattern).expect("demo patterns are valid");
        let verdict = if re.is_match(input) { "matches" } else { "does not match" };
        println!("{:?} {} {:?}", input, verdict, pattern);
    }

    match rematch::compile("oops?") {
        Ok(_) => unreachable!(),
        Err(err) => println!("rejected: {}", err),
    }
}
