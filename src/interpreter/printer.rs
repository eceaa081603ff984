use crate::ast::Node;

/// Renders an AST as an indented multi-line tree.
///
/// Every line ends with a newline; nesting is shown with two spaces of
/// indentation per level.
///
/// # Example
/// ```
/// use pylite::{interpreter::printer::render, parse};
///
/// let ast = parse("x = 1 + 2").unwrap();
///
/// assert_eq!(
///     render(&ast),
///     "Block:\n  Assignment:\n    Variable(x)\n    BinOp(op='+')\n      Number(1)\n      Number(2)\n"
/// );
/// ```
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();

    write_node(node, 0, &mut out);

    out
}

fn write_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&"  ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

fn write_node(node: &Node, indent: usize, out: &mut String) {
    match node {
        Node::Block { statements, .. } => {
            write_line(out, indent, "Block:");

            for statement in statements {
                write_node(statement, indent + 1, out);
            }
        },
        Node::Number { value, .. } => write_line(out, indent, &format!("Number({value})")),
        Node::Boolean { value, .. } => {
            let text = if *value { "True" } else { "False" };

            write_line(out, indent, &format!("Boolean({text})"));
        },
        Node::Str { value, .. } => write_line(out, indent, &format!("String(\"{value}\")")),
        Node::Variable { name, .. } => write_line(out, indent, &format!("Variable({name})")),
        Node::BinaryOp {
            left, op, right, ..
        } => {
            write_line(out, indent, &format!("BinOp(op='{op}')"));
            write_node(left, indent + 1, out);
            write_node(right, indent + 1, out);
        },
        Node::Assignment { target, value, .. } => {
            write_line(out, indent, "Assignment:");
            write_line(out, indent + 1, &format!("Variable({target})"));
            write_node(value, indent + 1, out);
        },
        Node::List { items, .. } => {
            write_line(out, indent, "List:");

            for item in items {
                write_node(item, indent + 1, out);
            }
        },
        Node::If {
            condition,
            then_body,
            else_body,
            ..
        } => {
            write_line(out, indent, "If:");
            write_line(out, indent + 1, "Condition:");
            write_node(condition, indent + 2, out);
            write_line(out, indent + 1, "Body:");
            write_node(then_body, indent + 2, out);

            if let Some(body) = else_body {
                write_line(out, indent + 1, "Else:");
                write_node(body, indent + 2, out);
            }
        },
        Node::For {
            iterator,
            start,
            end,
            body,
            ..
        } => {
            write_line(out, indent, "For:");
            write_line(out, indent + 1, &format!("Iterator: {iterator}"));
            write_line(out, indent + 1, "Range Start:");
            write_node(start, indent + 2, out);
            write_line(out, indent + 1, "Range End:");
            write_node(end, indent + 2, out);
            write_line(out, indent + 1, "Body:");
            write_node(body, indent + 2, out);
        },
        Node::While {
            condition, body, ..
        } => {
            write_line(out, indent, "While:");
            write_line(out, indent + 1, "Condition:");
            write_node(condition, indent + 2, out);
            write_line(out, indent + 1, "Body:");
            write_node(body, indent + 2, out);
        },
        Node::Print { expr, .. } => {
            write_line(out, indent, "Print:");
            write_node(expr, indent + 1, out);
        },
        Node::FunctionCall {
            name, arguments, ..
        } => {
            write_line(out, indent, &format!("FunctionCall({name})"));

            if !arguments.is_empty() {
                write_line(out, indent + 1, "Args:");

                for argument in arguments {
                    write_node(argument, indent + 2, out);
                }
            }
        },
    }
}
