/*!
A uniform view of the parts of a formula.

Literals, clauses, and formulas each evaluate against a row, or against every row of a dataset, and a [Node] borrows any of the three to evaluate without regard to which it is.

Evaluation through a node is direct, and does not use the counts kept by a formula.
And so nodes also serve to check those counts.
*/

use crate::{
    data::Value,
    generic::bits::Bits,
    structures::{clause::Clause, formula::Formula, literal::Literal},
};

#[derive(Clone, Copy, Debug)]
pub enum Node<'a> {
    Literal(&'a Literal),
    Clause(&'a Clause),
    Formula(&'a Formula),
}

impl<'a> Node<'a> {
    /// Whether the node is true on the row.
    ///
    /// A clause is the conjunction of its literals and a formula is the disjunction of its clauses.
    pub fn test(&self, row: &[Value]) -> bool {
        match self {
            Node::Literal(literal) => literal.test(row),
            Node::Clause(clause) => clause.literals().iter().all(|literal| literal.test(row)),
            Node::Formula(formula) => formula.clauses().any(|clause| Node::Clause(clause).test(row)),
        }
    }

    /// The rows on which the node is true, out of `rows` rows.
    pub fn satisfies(&self, rows: usize) -> Bits {
        match self {
            Node::Literal(literal) => {
                debug_assert_eq!(literal.satisfies().len(), rows);
                literal.satisfies().clone()
            }

            Node::Clause(clause) => clause.satisfies(rows),

            Node::Formula(formula) => {
                let mut bits = Bits::zeros(rows);
                for clause in formula.clauses() {
                    bits.or_assign(&clause.satisfies(rows));
                }
                bits
            }
        }
    }

    /// The number of children of the node.
    pub fn size(&self) -> usize {
        match self {
            Node::Literal(_) => 0,
            Node::Clause(clause) => clause.size(),
            Node::Formula(formula) => formula.clause_count(),
        }
    }

    /// The children of the node, in order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Literal(_) => Vec::default(),
            Node::Clause(clause) => clause.literals().iter().map(|literal| Node::Literal(literal.as_ref())).collect(),
            Node::Formula(formula) => formula.clauses().map(Node::Clause).collect(),
        }
    }
}

impl std::fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Literal(literal) => write!(f, "{literal}"),
            Node::Clause(clause) => write!(f, "{clause}"),
            Node::Formula(formula) => write!(f, "{formula}"),
        }
    }
}
