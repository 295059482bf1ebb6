//! Static eVatR status-code table.
//!
//! The codes and their German descriptions are published by the BZSt on the
//! eVatR interface documentation page. The table is regenerated offline by a
//! maintenance scraper; at runtime it is immutable.

/// Returned for status codes that are not in the table.
pub const ERROR_DESCRIPTION_FALLBACK: &str =
    "Beschreibung für diesen Code wurde nicht gefunden.";

/// Look up the official German description for an eVatR status code.
///
/// Total: unknown codes resolve to [`ERROR_DESCRIPTION_FALLBACK`] instead of
/// failing, so a structurally valid response always maps to a complete
/// result.
pub fn error_description(code: i32) -> &'static str {
    STATUS_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| STATUS_CODES[idx].1)
        .unwrap_or(ERROR_DESCRIPTION_FALLBACK)
}

/// eVatR status codes (sorted by code for binary search).
static STATUS_CODES: &[(i32, &str)] = &[
    (200, "Die angefragte USt-IdNr. ist gültig."),
    (201, "Die angefragte USt-IdNr. ist ungültig."),
    (
        202,
        "Die angefragte USt-IdNr. ist ungültig. Sie ist nicht in der Unternehmerdatei des betreffenden EU-Mitgliedstaates registriert.",
    ),
    (
        203,
        "Die angefragte USt-IdNr. ist ungültig. Sie ist erst ab einem bestimmten Datum gültig (siehe Feld 'Gueltig_ab').",
    ),
    (
        204,
        "Die angefragte USt-IdNr. ist ungültig. Sie war nur in einem bestimmten Zeitraum gültig (siehe Felder 'Gueltig_ab' und 'Gueltig_bis').",
    ),
    (
        205,
        "Ihre Anfrage kann derzeit durch den angefragten EU-Mitgliedstaat oder aus anderen Gründen nicht beantwortet werden. Bitte versuchen Sie es später noch einmal.",
    ),
    (
        206,
        "Ihre deutsche USt-IdNr. ist ungültig. Eine Bestätigungsanfrage ist daher nicht möglich.",
    ),
    (
        207,
        "Ihnen wurde die deutsche USt-IdNr. ausschließlich zu Zwecken der Besteuerung des innergemeinschaftlichen Erwerbs erteilt. Sie sind somit nicht berechtigt, Bestätigungsanfragen zu stellen.",
    ),
    (
        208,
        "Für die von Ihnen angefragte USt-IdNr. läuft gerade eine Anfrage von einem anderen Nutzer. Eine Bearbeitung ist momentan nicht möglich. Bitte versuchen Sie es später noch einmal.",
    ),
    (
        209,
        "Die angefragte USt-IdNr. ist ungültig. Sie entspricht nicht dem Aufbau, der für diesen EU-Mitgliedstaat gilt.",
    ),
    (
        210,
        "Die angefragte USt-IdNr. ist ungültig. Sie entspricht nicht den Prüfziffernregeln, die für diesen EU-Mitgliedstaat gelten.",
    ),
    (
        211,
        "Die angefragte USt-IdNr. ist ungültig. Sie enthält unzulässige Zeichen.",
    ),
    (
        212,
        "Die angefragte USt-IdNr. ist ungültig. Sie enthält ein unzulässiges Länderkennzeichen.",
    ),
    (213, "Die Abfrage einer deutschen USt-IdNr. ist nicht möglich."),
    (
        214,
        "Ihre deutsche USt-IdNr. ist fehlerhaft. Sie beginnt mit 'DE' gefolgt von 9 Ziffern.",
    ),
    (
        215,
        "Ihre Anfrage enthält nicht alle notwendigen Angaben für eine einfache Bestätigungsanfrage (Ihre deutsche USt-IdNr. und die ausländische USt-IdNr.). Ihre Anfrage kann deshalb nicht bearbeitet werden.",
    ),
    (
        216,
        "Ihre Anfrage enthält nicht alle notwendigen Angaben für eine qualifizierte Bestätigungsanfrage (Ihre deutsche USt-IdNr., die ausländische USt-IdNr., Firmenname einschließlich Rechtsform und Ort). Es wurde eine einfache Bestätigungsanfrage durchgeführt mit folgendem Ergebnis: Die angefragte USt-IdNr. ist gültig.",
    ),
    (
        217,
        "Bei der Verarbeitung der Daten aus dem angefragten EU-Mitgliedstaat ist ein Fehler aufgetreten. Ihre Anfrage kann deshalb nicht bearbeitet werden.",
    ),
    (
        218,
        "Eine qualifizierte Bestätigung ist zur Zeit nicht möglich. Es wurde eine einfache Bestätigungsanfrage mit folgendem Ergebnis durchgeführt: Die angefragte USt-IdNr. ist gültig.",
    ),
    (
        219,
        "Bei der Durchführung der qualifizierten Bestätigungsanfrage ist ein Fehler aufgetreten. Es wurde eine einfache Bestätigungsanfrage mit folgendem Ergebnis durchgeführt: Die angefragte USt-IdNr. ist gültig.",
    ),
    (
        220,
        "Bei der Anforderung der amtlichen Bestätigungsmitteilung ist ein Fehler aufgetreten. Sie werden keine amtliche Bestätigungsmitteilung erhalten.",
    ),
    (
        221,
        "Die Anfragedaten enthalten nicht alle notwendigen Parameter oder einen ungültigen Datentyp.",
    ),
    (
        999,
        "Eine Bearbeitung Ihrer Anfrage ist zurzeit nicht möglich. Bitte versuchen Sie es später noch einmal.",
    ),
];
