//! Shared fixtures for unit tests.

use std::fs;
use std::path::Path;

use crate::config::city_file_name;
use crate::filters::City;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St,Clark St,Subscriber,Male,1984.0
1,2017-01-02 09:15:00,2017-01-02 09:20:00,300,Canal St,Lake St,Customer,,
2,2017-01-09 17:30:00,2017-01-09 17:50:00,1200,Lake St,Clark St,Subscriber,Female,1990.0
3,2017-01-01 17:05:00,2017-01-01 17:29:09,1449,Canal St,Clark St,Subscriber,Male,1984.0
4,2017-03-03 09:45:00,2017-03-03 09:55:00,600,Lake St,Canal St,Customer,Female,1975.0
5,2017-06-05 08:00:00,2017-06-05 08:06:40,400,Clark St,Canal St,Subscriber,Male,2001.0
";
pub const CHICAGO_ROWS: usize = 6;

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-14 07:00:00,2017-02-14 07:05:00,300.5,Union Station,Dupont Circle,Subscriber
1,2017-02-14 07:30:00,2017-02-14 07:31:30,90.7,Dupont Circle,Union Station,Customer
2,2017-05-20 12:00:00,2017-05-20 12:55:34,3334.0,Union Station,Dupont Circle,Subscriber
";
pub const WASHINGTON_ROWS: usize = 3;

/// Write all three city files into `dir`. New York reuses the Chicago rows.
pub fn write_city_files(dir: &Path) {
    for city in City::ALL {
        let contents = match city {
            City::Washington => WASHINGTON_CSV,
            City::Chicago | City::NewYork => CHICAGO_CSV,
        };
        fs::write(dir.join(city_file_name(city)), contents).unwrap();
    }
}
