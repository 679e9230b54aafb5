//! Line drawing operators

use lopdf::content::Operation;
use lopdf::Object;

/// Generate PDF operators for one stroked line segment
///
/// Dashed lines set a 1-on 1-off dash pattern before the stroke and reset
/// it afterwards so later segments come out solid again.
pub(crate) fn line_operations(x1: f64, y1: f64, x2: f64, y2: f64, dashed: bool) -> Vec<Operation> {
    let mut ops = Vec::new();

    if dashed {
        ops.push(Operation::new(
            "d",
            vec![Object::Array(vec![1.into(), 1.into()]), 0.into()],
        ));
    }

    ops.push(Operation::new(
        "m",
        vec![(x1 as f32).into(), (y1 as f32).into()],
    ));
    ops.push(Operation::new(
        "l",
        vec![(x2 as f32).into(), (y2 as f32).into()],
    ));
    ops.push(Operation::new("S", vec![]));

    if dashed {
        ops.push(Operation::new("d", vec![Object::Array(vec![]), 0.into()]));
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_solid_line_operations() {
        let ops = line_operations(5.0, 10.0, 100.0, 10.0, false);
        let names: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(names, vec!["m", "l", "S"]);
    }

    #[test]
    fn test_dashed_line_sets_and_resets_pattern() {
        let ops = line_operations(5.0, 10.0, 100.0, 10.0, true);
        let names: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(names, vec!["d", "m", "l", "S", "d"]);

        assert_eq!(
            ops[0].operands[0],
            Object::Array(vec![1.into(), 1.into()])
        );
        assert_eq!(ops[4].operands[0], Object::Array(vec![]));
    }

    #[test]
    fn test_line_endpoints_become_operands() {
        let ops = line_operations(5.7, 45.0, 158.7, 45.0, false);
        let expected_x1: Object = (5.7f32).into();
        let expected_x2: Object = (158.7f32).into();
        assert_eq!(ops[0].operands[0], expected_x1);
        assert_eq!(ops[1].operands[0], expected_x2);
    }
}
