//! Text of the closing message.

use data_loader::MovieEntry;

const PREAMBLE: &str = "Thanks, Here is a list of movies I would recommend:";
const SEPARATOR: &str = ",\n";
const CLOSING: &str = ".\n Enjoy!";

/// Build the message listing `movies` as `title(genre)`, in the given order
pub fn fulfilled_message(movies: &[MovieEntry]) -> String {
    let mut message = String::from(PREAMBLE);
    for movie in movies {
        message.push_str(SEPARATOR);
        message.push_str(&movie.to_string());
    }
    message.push_str(CLOSING);
    message
}
