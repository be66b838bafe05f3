mod league;
mod season;
