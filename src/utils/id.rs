const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of generated request identifiers
pub const REQUEST_ID_LEN: usize = 12;

/// Generates a short random identifier used to correlate a request with its log lines
///
/// The identifier is made of uppercase letters and digits.
///
/// # Examples
/// ```
/// use padrino_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn get_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LEN, &ALPHABET)
}
