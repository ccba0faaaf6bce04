use civtime::{Date, DateTime, DateTimeList, Time};

fn main() {
    let mut meeting = DateTime::new(Date::new(2024, 2, 28), Time::new(23, 15, 0));
    println!("start:    {meeting} ({})", meeting.weekday());

    meeting.add_time_difference(&Time::new(1, 0, 0));
    println!("+1h:      {meeting} ({})", meeting.weekday());

    let later = DateTime::from_parts(2024, 2, 29, 18, 45, 30);
    println!("until {later}: {}", meeting.calculate_time_difference(&later));

    let mut list: DateTimeList = [meeting, later, DateTime::from_parts(2023, 7, 4, 6, 0, 0)]
        .into_iter()
        .collect();
    list.sort_by_date();
    println!("by date:  {:?}", list.iter().map(ToString::to_string).collect::<Vec<_>>());
    list.sort_by_time();
    println!("by time:  {:?}", list.iter().map(ToString::to_string).collect::<Vec<_>>());
}
