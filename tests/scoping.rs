/*
 * Variable and Scope Tests
 *
 * Declarations, assignment, shadowing in nested blocks, and the errors
 * raised for unknown names or bad assignment targets.
 */

mod cases;

test_case! {
    name: uninitialized_variable_is_nil,
    input: "var a; print a;",
    output: "nil\n",
}

test_case! {
    name: assignment_is_right_associative,
    input: "var a; var b; a = b = 3; print a; print b;",
    output: "3\n3\n",
}

test_case! {
    name: assignment_reaches_enclosing_scope,
    input: "var a = 1; { a = 2; } print a;",
    output: "2\n",
}

test_case! {
    name: shadowing_does_not_leak,
    input: "var a = 1; { var a = 2; print a; } print a;",
    output: "2\n1\n",
}

test_case! {
    name: redeclaring_a_global_replaces_it,
    input: "var a = 1; var a = 2; print a;",
    output: "2\n",
}

test_case! {
    name: initializer_sees_enclosing_binding,
    input: "var a = 1; { var a = a + 1; print a; } print a;",
    output: "2\n1\n",
}

test_case! {
    name: block_locals_vanish_after_block,
    input: "{ var inner = 1; }\nprint inner;",
    output: "",
    errors: ["[Line 2][7] Error : undefined variable 'inner'"],
    exit_code: 70,
}

test_case! {
    name: reading_undefined_variable_fails,
    input: "print x;",
    output: "",
    errors: ["[Line 1][7] Error : undefined variable 'x'"],
    exit_code: 70,
}

test_case! {
    name: assigning_undefined_variable_fails,
    input: "x = 1;",
    output: "",
    errors: ["[Line 1][1] Error : undefined variable 'x'"],
    exit_code: 70,
}

test_case! {
    name: runtime_error_keeps_earlier_output,
    input: "print 1; { print 2; print y; print 3; } print 4;",
    output: "1\n2\n",
    errors: ["[Line 1][27] Error : undefined variable 'y'"],
    exit_code: 70,
}

test_case! {
    name: literal_is_not_an_assignment_target,
    input: "1 = 2;",
    output: "",
    errors: ["[Line 1][3] Error at '=': invalid assignment target"],
    exit_code: 65,
}

test_case! {
    name: binary_expression_is_not_an_assignment_target,
    input: "var a; var b; a + b = 3;",
    output: "",
    errors: ["[Line 1][21] Error at '=': invalid assignment target"],
    exit_code: 65,
}
