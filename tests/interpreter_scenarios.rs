mod common;

use common::{eval_and_output, eval_and_stack, new_interpreter, numbers};
use scratch::location_here;
use scratch::runtime::data_structures::dictionary::WordRuntime;
use scratch::runtime::data_structures::value::Value;
use scratch::runtime::error::{self, ErrorKind};
use scratch::runtime::interpreter::{
    CodeManagement, Interpreter, InterpreterStack, Mode, WordManagement,
};
use std::rc::Rc;

#[test]
fn demo_lines_print_what_they_always_have() {
    let (mut interpreter, output) = new_interpreter();

    let lines = [
        "1 2 + print",
        "3 4 - print",
        "5 6 * print",
        "7 8 / print",
        "9 sqrt print",
        "10 dup pstack clear",
        "11 drop pstack",
        "12 13 swap pstack clear",
        "14 15 over pstack clear",
        "16 17 18 rot pstack clear",
        "var a 19 a ! a @ print",
        "20 const b b print",
        "\" 21\" print",
        "22 /* comment */ print",
        "23 ( comment ) print",
        "24 // comment\n print",
        ": c 25 print ; c",
        "pstack",
    ];

    for line in lines {
        interpreter.run(line).unwrap();
    }

    assert_eq!(
        output.lines(),
        vec![
            "3",
            "-1",
            "30",
            "0.875",
            "3",
            "<2> 10 10",
            "<0>",
            "<2> 13 12",
            "<3> 14 15 14",
            "<3> 17 18 16",
            "19",
            "20",
            "21",
            "22",
            "23",
            "24",
            "25",
            "<0>",
        ]
    );
}

#[test]
fn compiled_word_runs_its_body() {
    assert_eq!(eval_and_stack(": double dup + ; 5 double").unwrap(), vec![10.0]);
}

#[test]
fn compiling_leaves_the_data_stack_alone() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run("7 : f 1 2 + ;").unwrap();

    assert_eq!(numbers(&interpreter), vec![7.0]);
    assert!(interpreter.compile_buffer().is_empty());
    assert_eq!(interpreter.mode(), Mode::Interpreting);

    interpreter.run("f").unwrap();
    assert_eq!(numbers(&interpreter), vec![7.0, 3.0]);
}

#[test]
fn definition_can_span_runs() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run(": sq dup").unwrap();
    assert_eq!(interpreter.mode(), Mode::Compiling);
    assert_eq!(interpreter.compile_buffer().len(), 1);

    interpreter.run("* ; 3 sq").unwrap();
    assert_eq!(interpreter.mode(), Mode::Interpreting);
    assert_eq!(numbers(&interpreter), vec![9.0]);
}

#[test]
fn variables_get_their_own_cells() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run("var x var y 42 x ! 7 y !").unwrap();
    interpreter.run("x @ y @").unwrap();

    assert_eq!(numbers(&interpreter), vec![42.0, 7.0]);
    assert_eq!(interpreter.cells().len(), 2);
}

#[test]
fn variable_pushes_a_cell_reference() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run("var x x x").unwrap();

    let stack = interpreter.data_stack();
    assert_eq!(stack.len(), 2);
    assert!(stack[0].is_cell());
    assert_eq!(stack[0], stack[1]);
}

#[test]
fn variable_can_hold_text() {
    let output = eval_and_output("var s \" hello there\" s ! s @ print").unwrap();
    assert_eq!(output, "hello there\n");
}

#[test]
fn constant_captures_the_value_at_definition() {
    assert_eq!(
        eval_and_stack("var x 1 x ! x @ const one 5 x ! one x @").unwrap(),
        vec![1.0, 5.0]
    );
}

#[test]
fn string_literal_pushes_text() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run("\" hello world\"").unwrap();

    assert_eq!(interpreter.data_stack(), &vec![Value::from("hello world")]);
}

#[test]
fn string_literal_compiles_into_word() {
    let output = eval_and_output(": greet \" hi\" print ; greet greet").unwrap();
    assert_eq!(output, "hi\nhi\n");
}

#[test]
fn immediate_words_run_while_compiling() {
    let (mut interpreter, _) = new_interpreter();

    // The literal lands in the compile buffer where const finds it, so k exists before g is done.
    interpreter.run(": g 5 const k ;").unwrap();
    assert_eq!(numbers(&interpreter), Vec::<f64>::new());

    interpreter.run("k g").unwrap();
    assert_eq!(numbers(&interpreter), vec![5.0]);
}

#[test]
fn comments_are_ignored_everywhere() {
    assert_eq!(
        eval_and_stack("1 ( one ) /* two\nlines */ 2 // rest\n: f ( x -- ) 3 // inner\n ; f")
            .unwrap(),
        vec![1.0, 2.0, 3.0]
    );
}

#[test]
fn pstack_quotes_text_and_leaves_the_stack() {
    let (mut interpreter, output) = new_interpreter();

    interpreter.run("\" a b\" 1 pstack").unwrap();

    assert_eq!(output.contents(), "<2> \"a b\" 1\n");
    assert_eq!(interpreter.data_stack().len(), 2);
}

#[test]
fn print_uses_plain_number_formatting() {
    assert_eq!(
        eval_and_output("2.5 print -0.5 print 1 0 / print 100 print").unwrap(),
        "2.5\n-0.5\ninf\n100\n"
    );
}

#[test]
fn sqrt_of_negative_is_nan() {
    let result = eval_and_stack("-1 sqrt").unwrap();

    assert_eq!(result.len(), 1);
    assert!(result[0].is_nan());
}

#[test]
fn printed_infinity_reads_back() {
    assert_eq!(eval_and_stack("inf 1 +").unwrap(), vec![f64::INFINITY]);
}

#[test]
fn redefinition_does_not_change_compiled_words() {
    let (mut interpreter, output) = new_interpreter();

    interpreter.run(": show print ;").unwrap();
    interpreter.run(": print drop ;").unwrap();
    interpreter.run("5 show 6 print").unwrap();

    assert_eq!(output.contents(), "5\n");
    assert!(interpreter.data_stack().is_empty());
}

#[test]
fn later_definition_wins() {
    assert_eq!(
        eval_and_stack(": f 1 ; : f 2 ; f").unwrap(),
        vec![2.0]
    );
}

#[test]
fn words_lists_the_dictionary() {
    let (mut interpreter, output) = new_interpreter();

    interpreter.run(": mine ; words").unwrap();

    let count = interpreter.dictionary().len();
    let lines = output.lines();

    assert_eq!(lines[0], format!("{} words defined.", count));
    assert!(lines.iter().any(|line| line.starts_with("MINE ")));
    assert!(
        lines
            .iter()
            .any(|line| line.starts_with(": ") && line.contains("immediate"))
    );
}

#[test]
fn dup_on_empty_stack_underflows() {
    let error = eval_and_stack("dup").unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::StackUnderflow);
}

#[test]
fn failed_binary_word_leaves_the_stack_intact() {
    for (text, word) in [("1", "+"), ("1", "swap"), ("1", "over"), ("1 2", "rot")] {
        let (mut interpreter, _) = new_interpreter();

        interpreter.run(text).unwrap();
        let before = numbers(&interpreter);

        let error = interpreter.run(word).unwrap_err();

        assert_eq!(*error.kind(), ErrorKind::StackUnderflow, "word {}", word);
        assert_eq!(numbers(&interpreter), before, "word {}", word);
    }
}

#[test]
fn unknown_word_is_reported_uppercased() {
    let error = eval_and_stack("1 foo").unwrap_err();

    assert_eq!(*error.kind(), ErrorKind::UnknownWord("FOO".to_string()));

    let location = error.location().as_ref().unwrap();
    assert_eq!((location.line(), location.column()), (1, 3));
    assert_eq!(error.to_string(), "<run> (1, 3): Unknown word: [FOO]");
}

#[test]
fn unknown_word_while_compiling_is_reported() {
    let error = eval_and_stack(": f nope ;").unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::UnknownWord("NOPE".to_string()));
}

#[test]
fn errors_abort_the_rest_of_the_run() {
    let (mut interpreter, _) = new_interpreter();

    assert!(interpreter.run("1 bogus 2").is_err());
    assert_eq!(numbers(&interpreter), vec![1.0]);

    interpreter.run("3").unwrap();
    assert_eq!(numbers(&interpreter), vec![1.0, 3.0]);
}

#[test]
fn text_in_arithmetic_is_a_type_mismatch() {
    let error = eval_and_stack("\" a\" 1 +").unwrap_err();

    assert_eq!(
        *error.kind(),
        ErrorKind::TypeMismatch {
            expected: "number",
            found: "text".to_string()
        }
    );
}

#[test]
fn fetch_from_a_number_is_a_type_mismatch() {
    let error = eval_and_stack("5 @").unwrap_err();

    assert!(matches!(
        error.kind(),
        ErrorKind::TypeMismatch {
            expected: "variable",
            ..
        }
    ));
}

#[test]
fn end_without_start_is_an_error() {
    let error = eval_and_stack("1 ;").unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::NotCompiling);
}

#[test]
fn running_out_of_input_is_an_error() {
    for text in [":", "var", "5 const", "\" unterminated", "( open", "/* open", "// no newline"] {
        let error = eval_and_stack(text).unwrap_err();
        assert_eq!(*error.kind(), ErrorKind::UnexpectedEndOfInput, "text {}", text);
    }
}

#[test]
fn errors_carry_the_call_stack() {
    let error = eval_and_stack(": bad dup ; bad").unwrap_err();

    let call_stack = error.call_stack().as_ref().unwrap();
    let words: Vec<&str> = call_stack.iter().map(|item| item.word().as_str()).collect();

    assert_eq!(words, vec!["BAD", "DUP"]);
}

#[test]
fn host_defined_words_behave_like_built_ins() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.define(
        "answer",
        WordRuntime::Normal,
        Rc::new(|interpreter: &mut dyn Interpreter| -> error::Result<()> {
            interpreter.push(42.0.into());
            Ok(())
        }),
    );

    interpreter.run("answer : twice-answer ANSWER answer + ; twice-answer").unwrap();

    assert_eq!(numbers(&interpreter), vec![42.0, 84.0]);
}

#[test]
fn host_words_can_run_more_text() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.define(
        "three",
        WordRuntime::Normal,
        Rc::new(|interpreter: &mut dyn Interpreter| interpreter.run("1 2 +")),
    );

    interpreter.run("three 4 *").unwrap();

    assert_eq!(numbers(&interpreter), vec![12.0]);
}

#[test]
fn host_can_execute_words_by_name() {
    let (mut interpreter, _) = new_interpreter();

    interpreter.run("3").unwrap();
    interpreter
        .execute_word_named(&location_here!(), "dup")
        .unwrap();

    assert_eq!(numbers(&interpreter), vec![3.0, 3.0]);
    assert!(interpreter.find_word("Dup").is_some());
}

#[test]
fn script_files_run_like_text() {
    let path = std::env::temp_dir().join(format!("scratch_test_{}.scr", std::process::id()));
    std::fs::write(&path, ": sq dup * ;\n4 sq\n").unwrap();

    let (mut interpreter, _) = new_interpreter();
    let result = interpreter.process_source_file(&path.to_string_lossy());
    let _ = std::fs::remove_file(&path);

    result.unwrap();
    assert_eq!(numbers(&interpreter), vec![16.0]);
}

#[test]
fn missing_script_file_is_an_io_error() {
    let (mut interpreter, _) = new_interpreter();

    let error = interpreter
        .process_source_file("/definitely/not/here.scr")
        .unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::Io(_)));
}
