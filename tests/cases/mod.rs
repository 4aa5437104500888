#![allow(dead_code)]

use lox::{Engine, EngineOptions, Error, Value};
use once_cell::sync::Lazy;

/// What running one source string produced.
pub struct Outcome {
    pub output: String,
    pub result: Result<Option<Value>, Error>,
}

impl Outcome {
    /// One-line diagnostics of a failed run, or an empty list.
    pub fn diagnostics(&self) -> Vec<String> {
        match &self.result {
            Ok(_) => Vec::new(),
            Err(err) => err.diagnostics().iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match &self.result {
            Ok(_) => 0,
            Err(err) => err.exit_code(),
        }
    }
}

/// Run `source` as a script on a fresh engine.
pub fn run(source: &str) -> Outcome {
    run_with(&mut Engine::new(EngineOptions::default()), source)
}

pub fn run_with(engine: &mut Engine, source: &str) -> Outcome {
    let mut out = Vec::new();
    let result = engine.run(source, &mut out);
    Outcome {
        output: String::from_utf8(out).expect("print output is UTF-8"),
        result,
    }
}

/// Feed `lines` one at a time to an interactive session, collecting what a
/// prompt user would see on stdout: printed output and echoed values.
pub fn run_session(lines: &[&str]) -> (String, Vec<String>) {
    let mut engine = Engine::new(EngineOptions::interactive());
    let mut transcript = String::new();
    let mut diagnostics = Vec::new();
    for line in lines {
        let outcome = run_with(&mut engine, line);
        transcript.push_str(&outcome.output);
        match outcome.result {
            Ok(Some(value)) => {
                transcript.push_str(&value.stringify());
                transcript.push('\n');
            }
            Ok(None) => {}
            Err(err) => diagnostics.extend(err.diagnostics().iter().map(|d| d.to_string())),
        }
    }
    (transcript, diagnostics)
}

#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        output: $output:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let outcome = $crate::cases::run($input);
            pretty_assertions::assert_eq!(outcome.diagnostics(), Vec::<String>::new());
            pretty_assertions::assert_eq!(outcome.output, $output);
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        output: $output:expr,
        errors: [$($error:expr),+ $(,)?],
        exit_code: $code:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let outcome = $crate::cases::run($input);
            pretty_assertions::assert_eq!(outcome.output, $output);
            pretty_assertions::assert_eq!(outcome.diagnostics(), vec![$($error.to_string()),+]);
            pretty_assertions::assert_eq!(outcome.exit_code(), $code);
        }
    };
}

pub struct Program {
    pub name: &'static str,
    pub source: &'static str,
    pub output: &'static str,
}

/// Whole scripts exercising several features at once.
pub static PROGRAMS: Lazy<Vec<Program>> = Lazy::new(|| {
    vec![
        Program {
            name: "fibonacci",
            source: r#"
var a = 0;
var b = 1;
for (var i = 0; i < 10; i = i + 1) {
  print a;
  var next = a + b;
  a = b;
  b = next;
}
"#,
            output: "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n",
        },
        Program {
            name: "shadowing",
            source: r#"
var a = "global a";
var b = "global b";
var c = "global c";
{
  var a = "outer a";
  var b = "outer b";
  {
    var a = "inner a";
    print a;
    print b;
    print c;
  }
  print a;
  print b;
  print c;
}
print a;
print b;
print c;
"#,
            output: "inner a\nouter b\nglobal c\n\
                     outer a\nouter b\nglobal c\n\
                     global a\nglobal b\nglobal c\n",
        },
        Program {
            name: "countdown",
            source: r#"
var n = 3;
while (n > 0) {
  print n;
  n = n - 1;
}
print "liftoff";
"#,
            output: "3\n2\n1\nliftoff\n",
        },
        Program {
            name: "fizzbuzz_without_modulo",
            source: r#"
for (var i = 1; i <= 15; i = i + 1) {
  var three = i / 3;
  var five = i / 5;
  var by3 = false;
  var by5 = false;
  for (var k = 0; k <= three; k = k + 1) if (k == three) by3 = true;
  for (var k = 0; k <= five; k = k + 1) if (k == five) by5 = true;
  if (by3 and by5) print "FizzBuzz";
  else if (by3) print "Fizz";
  else if (by5) print "Buzz";
  else print i;
}
"#,
            output: "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n",
        },
        Program {
            name: "string_building",
            source: r#"
var s = "";
for (var i = 0; i < 3; i = i + 1) s = s + "ab";
print s;
print s == "ababab";
"#,
            output: "ababab\ntrue\n",
        },
    ]
});
