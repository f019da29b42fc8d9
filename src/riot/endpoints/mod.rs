mod league;
mod summoner;
