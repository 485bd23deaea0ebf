use std::fmt;

use super::Array;

impl<T: fmt::Display> Array<T> {
    // Renders the sub-array starting at `offset` along `axis`. The last axis
    // prints elements space-separated on one line; outer axes stack their
    // children, indented so nested brackets line up NumPy-style.
    fn fmt_axis(
        &self,
        f: &mut fmt::Formatter<'_>,
        axis: usize,
        offset: usize,
        indent: usize,
    ) -> fmt::Result {
        write!(f, "[")?;
        if axis == self.shape.len() - 1 {
            for i in 0..self.shape[axis] {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[offset + i * self.strides[axis]])?;
            }
        } else {
            for i in 0..self.shape[axis] {
                if i > 0 {
                    write!(f, "\n{}", " ".repeat(indent + 1))?;
                }
                self.fmt_axis(f, axis + 1, offset + i * self.strides[axis], indent + 1)?;
            }
        }
        write!(f, "]")
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shape.is_empty() {
            // rank-0: a single scalar, no brackets
            return write!(f, "{}", self.data[0]);
        }
        self.fmt_axis(f, 0, 0, 0)
    }
}
