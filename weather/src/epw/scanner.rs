/*
MIT License
Copyright (c)  Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use crate::{Channel, Float, Location, Weather, EPW_HEADER_LINES};
use calendar::N_HOURS_PER_YEAR;
use tracing::warn;

pub(crate) struct EPWScanner<'a> {
    /// Indicates the position of current character being
    /// scanned
    current: usize,

    /// Indicates the position of the first character of the
    /// element being scanned
    start: usize,

    /// Indicates the line of the EPW file in which we are
    line: usize,

    /// The data source
    src: &'a [u8],

    /// Are we in a string? (i.e. within quotation marks, e.g. " STRING ")
    in_string: bool,

    /// Number of numeric fields that could not be parsed (and became zero)
    n_invalid: usize,
}

impl<'a> EPWScanner<'a> {
    /// Creates a new scanner.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            current: 0,
            start: 0,
            line: 1,
            src,
            in_string: false,
            n_invalid: 0,
        }
    }

    /// Parses the EPW source and builds a [`Weather`]
    pub fn build_weather(src: &'a [u8]) -> Weather {
        let mut scanner = EPWScanner::new(src);
        let mut weather = Weather::default();
        scanner.parse_file(&mut weather);
        weather
    }

    /// Checks if the scanner is finished
    fn is_finished(&self) -> bool {
        self.current >= self.src.len()
    }

    /// Scans all the characters until reaching the Comma
    /// or the end of the line. Returns a slice
    fn scan_element(&mut self) -> Option<&'a [u8]> {
        if self.is_finished() {
            return None;
        }

        loop {
            // Return if scanning is over
            if self.is_finished() {
                break;
            }

            // If we find a comma, and we are not in a string, break
            if !self.in_string && self.src[self.current] == b',' {
                break;
            }

            // Increase line number if required
            if self.src[self.current] == b'\n' {
                self.line += 1;
                self.in_string = false;
                break;
            }

            // Toggle string if we are in one.
            if self.src[self.current] == b'"' {
                self.in_string = !self.in_string;
            }
            self.current += 1;
        }

        // Ignore the \r thing that I hate
        let mut end = self.current.min(self.src.len());
        if end > self.start && self.src[end - 1] == b'\r' {
            end -= 1;
        }
        let (ini, fin) = (self.start, end);

        self.current += 1; // skip the comma
        self.start = self.current;

        self.src.get(ini..fin)
    }

    /// Scans all the elements in the current line
    fn scan_line(&mut self) -> Vec<&'a [u8]> {
        let line = self.line;
        let mut fields = Vec::with_capacity(35);
        while self.line == line {
            match self.scan_element() {
                Some(e) => fields.push(e),
                None => break,
            }
        }
        fields
    }

    fn scan_string(slice: Option<&[u8]>) -> String {
        match slice {
            Some(v) => String::from_utf8_lossy(v).trim().to_string(),
            None => String::new(),
        }
    }

    /// Scans an element and transforms it into a number. Elements
    /// that are missing or are not numbers become zero.
    fn scan_number(&mut self, slice: Option<&[u8]>) -> Float {
        match EPWScanner::scan_string(slice).parse::<Float>() {
            Ok(v) => v,
            Err(_) => {
                self.n_invalid += 1;
                0.0
            }
        }
    }

    /// Checks if the next element is empty
    #[cfg(test)]
    fn next_is_empty(&self) -> bool {
        // If scanner is finished, is empty
        if self.is_finished() {
            return true;
        }

        matches!(self.src[self.current], b',' | b'\n')
    }

    /// Parses the header (location) and then the hourly data
    fn parse_file(&mut self, weather: &mut Weather) {
        while !self.is_finished() && self.line <= EPW_HEADER_LINES {
            let fields = self.scan_line();
            let keyword = EPWScanner::scan_string(fields.first().copied());
            if keyword == *"LOCATION" {
                self.parse_location(&fields[1..], &mut weather.location);
            }
        }

        let mut hour = 0;
        while !self.is_finished() {
            let fields = self.scan_line();
            if fields.iter().all(|f| f.iter().all(|c| c.is_ascii_whitespace())) {
                // blank line
                continue;
            }
            if hour >= N_HOURS_PER_YEAR {
                break;
            }
            self.parse_data_line(&fields, hour, weather);
            hour += 1;
        }
        weather.n_rows = hour;

        if hour < N_HOURS_PER_YEAR {
            warn!(
                "Weather source has only {} hourly rows... the rest of the year will be zero",
                hour
            );
        }
        if self.n_invalid > 0 {
            warn!(
                "{} numeric fields in weather source could not be parsed and were set to zero",
                self.n_invalid
            );
        }
    }

    /// Parses a location... assumes that the LOCATION
    /// keyword has been consumed already
    fn parse_location(&mut self, fields: &[&[u8]], location: &mut Location) {
        let mut field = fields.iter().copied();
        location.city = EPWScanner::scan_string(field.next());
        location.state = EPWScanner::scan_string(field.next());
        location.country = EPWScanner::scan_string(field.next());
        location.source = EPWScanner::scan_string(field.next());
        location.wmo = EPWScanner::scan_string(field.next());

        location.latitude = self.scan_number(field.next());
        location.longitude = self.scan_number(field.next());
        location.timezone = self.scan_number(field.next());
        location.elevation = self.scan_number(field.next());
    }

    /// Stores the channels found in a data line
    fn parse_data_line(&mut self, fields: &[&[u8]], hour: usize, weather: &mut Weather) {
        for channel in Channel::ALL {
            let v = self.scan_number(fields.get(channel.epw_field()).copied());
            weather.channels.set(channel, hour, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0\nDESIGN CONDITIONS,1,Climate Design Data 2009 ASHRAE Handbook,,Heating,7,-1.1,0,-2.7,3.2\nTYPICAL/EXTREME PERIODS,6,Summer - Week Nearest Max Temperature For Period,Extreme,1/20,1/26\nGROUND TEMPERATURES,3,.5,,,,18.03,20.05,20.54,19.99,17.11,13.95,11.03,8.95,8.41,9.49,11.96,15.03\nHOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\nCOMMENTS 1,\"IWEC- WMO#855740 - South America -- Original Source Data (c) 2001 American Society of Heating, Refrigerating and Air-Conditioning Engineers (ASHRAE), Inc.\"\nCOMMENTS 2, -- Ground temps produced with a standard soil diffusivity of 2.3225760E-03 {m**2/day}\nDATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31\n";

    const DATA: &str = "1987,1,1,1,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,16.7,9.6,63,95600,0,1415,326,0,0,0,0,0,0,0,150,1.5,0,0,9.9,77777,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\r\n1987,1,1,2,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7A7A7A7A7*0E8*0*0,15.1,8.4,64,95700,0,1415,317,0,0,0,0,0,0,0,0,0.0,0,0,15.0,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\r\n1987,1,1,3,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,13.8,7.6,66,95700,0,1415,311,120,340,45,0,0,0,0,0,2.1,0,0,9.9,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\r\n1987,1,1,4,60,C9C9C9C9*0?9?9?9?9?9?9?9A7A7B8B8A7*0*0E8*0*0,12.7,7.3,70,95700,0,1415,306,0,0,0,0,0,0,0,0,0.0,0,0,9.9,22000,9,999999999,0,0.2680,0,88,0.000,0.0,0.0\r\n";

    #[test]
    fn test_scan_element() {
        let raw_source = "Hello,,how\n,are,you\n\"auto,con,ruedas\",tres".to_string();
        let source: Vec<u8> = raw_source.into_bytes();

        let mut s = EPWScanner::new(&source);

        assert_eq!("Hello".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 1);
        assert!(s.next_is_empty());

        assert_eq!("".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 1);
        assert!(!s.next_is_empty());

        assert_eq!("how".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 2);
        assert!(s.next_is_empty());

        assert_eq!("".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 2);
        assert!(!s.next_is_empty());

        assert_eq!("are".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 2);
        assert!(!s.next_is_empty());

        assert_eq!("you".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 3);
        assert!(!s.next_is_empty());

        assert_eq!(
            "\"auto,con,ruedas\"".to_string(),
            EPWScanner::scan_string(s.scan_element())
        );
        assert_eq!(s.line, 3);
        assert!(!s.next_is_empty());

        assert_eq!("tres".to_string(), EPWScanner::scan_string(s.scan_element()));
        assert_eq!(s.line, 3);
        assert!(s.next_is_empty());
        assert!(s.scan_element().is_none());
    }

    #[test]
    fn test_scan_line() {
        let source = b"a,b,c\r\n\r\nd".to_vec();
        let mut s = EPWScanner::new(&source);

        let first = s.scan_line();
        assert_eq!(first, vec![&b"a"[..], &b"b"[..], &b"c"[..]]);

        let blank = s.scan_line();
        assert_eq!(blank, vec![&b""[..]]);

        let last = s.scan_line();
        assert_eq!(last, vec![&b"d"[..]]);
        assert!(s.scan_line().is_empty());
    }

    #[test]
    fn test_location() {
        let raw_source = "LOCATION,SANTIAGO,-,CHL,IWEC Data,855740,-33.38,-70.78,-4.0,476.0\nDESIGN CONDITIONS,1,Climate".to_string();
        let source: Vec<u8> = raw_source.into_bytes();

        let mut s = EPWScanner::new(&source);
        let fields = s.scan_line();
        let mut location = Location::default();
        s.parse_location(&fields[1..], &mut location);

        assert_eq!(location.city, "SANTIAGO".to_string());
        assert_eq!(location.state, "-".to_string());
        assert_eq!(location.country, "CHL".to_string());
        assert_eq!(location.source, "IWEC Data".to_string());
        assert_eq!(location.wmo, "855740".to_string());
        assert_eq!(location.latitude, -33.38);
        assert_eq!(location.longitude, -70.78);
        assert_eq!(location.timezone, -4.0);
        assert_eq!(location.elevation, 476.0);
        assert_eq!(s.n_invalid, 0);

        assert_eq!(
            EPWScanner::scan_string(s.scan_element()),
            "DESIGN CONDITIONS".to_string()
        );
    }

    #[test]
    fn test_parse_file() {
        let source = format!("{}{}", HEADER, DATA);
        let weather = EPWScanner::build_weather(source.as_bytes());

        // Location
        assert_eq!(weather.location.city, "SANTIAGO".to_string());
        assert_eq!(weather.location.latitude, -33.38);
        assert_eq!(weather.location.longitude, -70.78);
        assert_eq!(weather.location.timezone, -4.0);

        // Data
        assert_eq!(weather.n_rows, 4);
        let dry_bulb = weather.channels.channel(Channel::DryBulbTemperature);
        assert_eq!(dry_bulb.len(), N_HOURS_PER_YEAR);
        assert_eq!(&dry_bulb[0..5], &[16.7, 15.1, 13.8, 12.7, 0.0]);
        assert_eq!(weather.channels.get(Channel::DewPointTemperature, 1), 8.4);
        assert_eq!(weather.channels.get(Channel::RelativeHumidity, 3), 70.0);
        assert_eq!(
            weather.channels.get(Channel::GlobalHorizontalRadiation, 2),
            120.0
        );
        assert_eq!(weather.channels.get(Channel::DirectNormalRadiation, 2), 340.0);
        assert_eq!(
            weather.channels.get(Channel::DiffuseHorizontalRadiation, 2),
            45.0
        );
        assert_eq!(weather.channels.get(Channel::WindSpeed, 0), 1.5);
        assert_eq!(weather.channels.get(Channel::WindSpeed, 2), 2.1);
    }

    #[test]
    fn test_malformed_numbers_become_zero() {
        let data = "1987,1,1,1,60,*,abc,9.6,63,95600,0,1415,326,10,20,,0,0,0,0,150,1.5\n1987,1,1,2,60,*,5.0\n";
        let source = format!("{}{}", HEADER, data);
        let mut s = EPWScanner::new(source.as_bytes());
        let mut weather = Weather::default();
        s.parse_file(&mut weather);

        assert_eq!(weather.n_rows, 2);
        assert_eq!(weather.channels.get(Channel::DryBulbTemperature, 0), 0.0);
        assert_eq!(weather.channels.get(Channel::DewPointTemperature, 0), 9.6);
        assert_eq!(
            weather.channels.get(Channel::GlobalHorizontalRadiation, 0),
            10.0
        );
        assert_eq!(
            weather.channels.get(Channel::DiffuseHorizontalRadiation, 0),
            0.0
        );
        assert_eq!(weather.channels.get(Channel::WindSpeed, 0), 1.5);

        // Truncated row
        assert_eq!(weather.channels.get(Channel::DryBulbTemperature, 1), 5.0);
        assert_eq!(weather.channels.get(Channel::WindSpeed, 1), 0.0);

        // 'abc', an empty field and six missing fields
        assert_eq!(s.n_invalid, 8);
    }

    #[test]
    fn test_extra_rows_are_ignored() {
        let mut source = HEADER.to_string();
        for i in 0..N_HOURS_PER_YEAR + 5 {
            source.push_str(&format!(
                "1987,1,1,1,60,*,{},0,0,0,0,0,0,0,0,0,0,0,0,0,0,0\n",
                i
            ));
        }
        let weather = EPWScanner::build_weather(source.as_bytes());
        assert_eq!(weather.n_rows, N_HOURS_PER_YEAR);
        let dry_bulb = weather.channels.channel(Channel::DryBulbTemperature);
        assert_eq!(dry_bulb.len(), N_HOURS_PER_YEAR);
        assert_eq!(dry_bulb[N_HOURS_PER_YEAR - 1], (N_HOURS_PER_YEAR - 1) as Float);
    }

    #[test]
    fn test_empty_source() {
        let weather = EPWScanner::build_weather(b"");
        assert_eq!(weather.n_rows, 0);
        assert_eq!(weather.location, Location::default());
        for c in Channel::ALL {
            assert!(weather.channels.channel(c).iter().all(|v| *v == 0.0));
        }
    }
}
