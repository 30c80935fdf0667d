use metro_travel::data_structures::MinQueue;
use ordered_float::OrderedFloat;

#[test]
fn test_pops_lowest_priority_first() {
    let mut queue: MinQueue<usize, OrderedFloat<f64>> = MinQueue::new();
    queue.push(1, OrderedFloat(10.0));
    queue.push(2, OrderedFloat(5.0));
    queue.push(3, OrderedFloat(7.5));

    assert_eq!(queue.pop(), Some((2, OrderedFloat(5.0))));
    assert_eq!(queue.pop(), Some((3, OrderedFloat(7.5))));
    assert_eq!(queue.pop(), Some((1, OrderedFloat(10.0))));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_ties_break_on_item_order() {
    let mut queue: MinQueue<Vec<usize>, OrderedFloat<f64>> = MinQueue::default();
    queue.push(vec![0, 2, 3], OrderedFloat(4.0));
    queue.push(vec![0, 1, 2, 3], OrderedFloat(4.0));
    queue.push(vec![0, 3], OrderedFloat(9.0));

    assert_eq!(queue.pop().map(|(path, _)| path), Some(vec![0, 1, 2, 3]));
    assert_eq!(queue.pop().map(|(path, _)| path), Some(vec![0, 2, 3]));
    assert_eq!(queue.pop().map(|(path, _)| path), Some(vec![0, 3]));
    assert_eq!(queue.pop(), None);
}
