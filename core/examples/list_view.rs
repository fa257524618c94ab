// examples/list_view.rs
//
// The collection utilities behind an admin table: header-click sorting
// plus a clamped pager.

use std::cmp::Ordering;

use formwork::{Pagination, SortOrder, Sorting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
  Name,
  CheckedInAt,
}

#[derive(Debug, Clone)]
struct Participant {
  name: &'static str,
  checked_in_at: u64,
}

fn comparator(key: Column, order: SortOrder) -> impl FnMut(&Participant, &Participant) -> Ordering {
  move |a, b| {
    let ascending = match key {
      Column::Name => a.name.cmp(b.name),
      Column::CheckedInAt => a.checked_in_at.cmp(&b.checked_in_at),
    };
    order.orient(ascending)
  }
}

fn main() {
  let participants: Vec<Participant> = (0..45)
    .map(|i| Participant {
      name: ["ada", "grace", "edsger", "barbara", "donald"][i % 5],
      checked_in_at: (i as u64) * 37 % 100,
    })
    .collect();

  let mut sorting = Sorting::new(Column::CheckedInAt);
  sorting.toggle(Column::Name); // click the Name header: descending
  sorting.toggle(Column::Name); // click again: ascending

  let sorted = sorting.sorted(&participants, comparator);

  let mut pager = Pagination::new(sorted.len(), 20);
  pager.set_page(5); // clamps to the last page (2)

  println!("page {} of {}", pager.page() + 1, pager.max_page() + 1);
  for row in pager.slice(&sorted) {
    println!("{:>8}  checked in at {}", row.name, row.checked_in_at);
  }
}
