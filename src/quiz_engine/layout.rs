use crate::quiz_engine::question::Question;

/// Arrange questions into rows for a `column_count`-column grid.
///
/// Questions run down the first column, then the second, and so on, using
/// `ceil(n / column_count)` rows. Trailing rows may be shorter. A column
/// count of zero is treated as one.
pub fn arrange(questions: &[Question], column_count: usize) -> Vec<Vec<&Question>> {
    let columns = column_count.max(1);
    let rows = (questions.len() + columns - 1) / columns;
    let mut grid: Vec<Vec<&Question>> = (0..rows).map(|_| Vec::with_capacity(columns)).collect();

    for (i, question) in questions.iter().enumerate() {
        grid[i % rows].push(question);
    }
    grid
}
