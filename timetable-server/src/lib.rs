//! Next-departures timetable server.
//!
//! A web service that answers: "what are the next three trains from
//! this station to that one, after a given time?" The timetable lives
//! in a spreadsheet with one sheet per route and is read fresh on
//! every request.

pub mod sheets;
pub mod timetable;
pub mod web;
