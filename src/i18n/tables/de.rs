// SPDX-License-Identifier: PMPL-1.0-or-later

//! German.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "current() ist in einem Übereinstimmungsmuster nicht zulässig!"),
    (ER_CURRENT_TAKES_NO_ARGS, "current() akzeptiert keine Argumente!"),
    (ER_DOCUMENT_REPLACED, "Die Implementierung der Funktion document() wurde durch org.apache.xalan.xslt.FuncDocument ersetzt!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Der Kontext hat kein Eignerdokument!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name() hat zu viele Argumente."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri() hat zu viele Argumente."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space() hat zu viele Argumente."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number() hat zu viele Argumente."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name() hat zu viele Argumente."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string() hat zu viele Argumente."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length() hat zu viele Argumente."),
    (ER_TRANSLATE_TAKES_3_ARGS, "Die Funktion translate() erfordert drei Argumente!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Die Funktion unparsed-entity-uri sollte ein Argument haben!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Die Namensbereichsachse ist bisher nicht implementiert!"),
    (ER_UNKNOWN_AXIS, "Unbekannte Achse: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "Unbekannte Übereinstimmungsoperation!"),
    (ER_INCORRECT_ARG_LENGTH, "Die Argumentlänge des Knotentests processing-instruction() ist falsch!"),
    (ER_CANT_CONVERT_TO_NUMBER, "{0} kann nicht in eine Zahl konvertiert werden"),
    (ER_CANT_CONVERT_TO_NODELIST, "{0} kann nicht in NodeList konvertiert werden!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "{0} kann nicht in NodeSetDTM konvertiert werden!"),
    (ER_CANT_CONVERT_TO_TYPE, "{0} kann nicht in type#{1} konvertiert werden"),
    (ER_EXPECTED_MATCH_PATTERN, "Übereinstimmungsmuster in getMatchScore erwartet!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Die Variable mit dem Namen {0} konnte nicht abgerufen werden"),
    (ER_UNKNOWN_OPCODE, "FEHLER! Unbekannter Operationscode: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Zusätzliche unzulässige Token: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Falsche Anführungszeichen im Literal... Doppelte Anführungszeichen erwartet!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Falsche Anführungszeichen im Literal... Einfache Anführungszeichen erwartet!"),
    (ER_EMPTY_EXPRESSION, "Leerer Ausdruck!"),
    (ER_EXPECTED_BUT_FOUND, "Erwartet wurde {0}, gefunden wurde: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Die Zusicherung des Programmierers ist falsch! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "Das Argument boolean(...) ist im XPath-Entwurf 19990709 nicht mehr optional."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "',' gefunden, aber kein vorheriges Argument vorhanden!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "',' gefunden, aber kein nachfolgendes Argument vorhanden!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[Vergleichselement]' oder '.[Vergleichselement]' ist eine unzulässige Syntax.  Verwenden Sie stattdessen 'self::node()[Vergleichselement]'."),
    (ER_ILLEGAL_AXIS_NAME, "Unzulässiger Achsenname: {0}"),
    (ER_UNKNOWN_NODETYPE, "Unbekannter Knotentyp: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Das Musterliteral ({0}) muss in Anführungszeichen angegeben werden!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} konnte nicht als Zahl formatiert werden!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "XML-TransformerFactory-Liaison konnte nicht erstellt werden: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Fehler! Der XPath-Auswahlausdruck (-select) wurde nicht gefunden."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "FEHLER! ENDOP nach OP_LOCATIONPATH konnte nicht gefunden werden."),
    (ER_ERROR_OCCURED, "Es ist ein Fehler aufgetreten!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "VariableReference für Variable außerhalb des Kontexts oder ohne Definition angegeben!  Name = {0}"),
    (ER_AXES_NOT_ALLOWED, "Nur die Achsen child:: und attribute:: sind in Übereinstimmungsmustern zulässig!  Fehlerhafte Achsen = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key() hat eine falsche Anzahl Argumente."),
    (ER_COUNT_TAKES_1_ARG, "Die Funktion count sollte ein Argument haben!"),
    (ER_COULDNOT_FIND_FUNCTION, "Die Funktion konnte nicht gefunden werden: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nicht unterstützte Codierung: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "Im DTM ist in getNextSibling ein Fehler aufgetreten... Wiederherstellung wird durchgeführt"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Programmierfehler: In EmptyNodeList kann nicht geschrieben werden."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "setDOMFactory wird nicht von XPathContext unterstützt!"),
    (ER_PREFIX_MUST_RESOLVE, "Das Präfix muss in einen Namensbereich aufgelöst werden: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "parse (InputSource Quelle) wird in XPathContext nicht unterstützt! {0} kann nicht geöffnet werden"),
    (ER_SAX_API_NOT_HANDLED, "SAX-API characters(char ch[]... wird nicht von DTM bearbeitet!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]... wird nicht von DTM bearbeitet!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison kann keine Knoten vom Typ {0} bearbeiten"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper kann keine Knoten vom Typ {0} bearbeiten"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Fehler bei DOM2Helper.parse: System-ID - {0} Zeile - {1}"),
    (ER_XERCES_PARSE_ERROR, "Fehler bei DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Ungültige UTF-16-Ersetzung festgestellt: {0} ?"),
    (ER_OIERROR, "E/A-Fehler"),
    (ER_CANNOT_CREATE_URL, "URL kann nicht erstellt werden für: {0}"),
    (ER_XPATH_READOBJECT, "In XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "Funktionstoken wurde nicht gefunden."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Der XPath-Typ kann nicht bearbeitet werden: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Diese NodeSet ist nicht veränderlich"),
    (ER_NODESETDTM_NOT_MUTABLE, "Diese NodeSetDTM ist nicht veränderlich"),
    (ER_VAR_NOT_RESOLVABLE, "Die Variable kann nicht aufgelöst werden: {0}"),
    (ER_NULL_ERROR_HANDLER, "Kein Fehlerbehandlungsprogramm vorhanden"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Zusicherung des Programmierers: Unbekannter Operationscode: {0}"),
    (ER_ZERO_OR_ONE, "0 oder 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "rtf() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "asNodeIterator() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "detach() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "num() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "xstr() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "str() wird nicht von XRTreeFragSelectWrapper unterstützt"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "fsb() wird für XStringForChars nicht unterstützt"),
    (ER_COULD_NOT_FIND_VAR, "Die Variable mit dem Namen {0} konnte nicht gefunden werden"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars kann keine Zeichenfolge als Argument annehmen"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "Das Argument FastStringBuffer kann nicht null sein"),
    (ER_TWO_OR_THREE, "2 oder 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Auf die Variable wurde zugegriffen, bevor sie gebunden wurde!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB kann keine Zeichenfolge als Argument annehmen!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Fehler! Root eines Walker wird auf null gesetzt!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Diese NodeSetDTM kann keinen vorherigen Knoten wiederholen!"),
    (ER_NODESET_CANNOT_ITERATE, "Diese NodeSet kann keinen vorherigen Knoten wiederholen!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Diese NodeSetDTM kann keine Indexierungs- oder Zählfunktionen ausführen!"),
    (ER_NODESET_CANNOT_INDEX, "Diese NodeSet kann keine Indexierungs- oder Zählfunktionen ausführen!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "setShouldCacheNodes kann nicht aufgerufen werden, nachdem nextNode aufgerufen wurde!"),
    (ER_ONLY_ALLOWS, "{0} lässt nur {1} Argument(e) zu"),
    (ER_UNKNOWN_STEP, "Zusicherung des Programmierers in getNextStepPos: Unbekannter stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Nach dem Token '/' oder '//' wurde ein relativer Positionspfad erwartet."),
    (ER_EXPECTED_LOC_PATH, "Es wurde ein Positionspfad erwartet, aber stattdessen wurde das Ende des XPath-Ausdrucks gefunden."),
    (ER_EXPECTED_LOC_STEP, "Nach dem Token '/' oder '//' wurde ein Positionsschritt erwartet."),
    (ER_EXPECTED_NODE_TEST, "Es wurde ein Knotentest erwartet, der entweder NCName:* oder dem QName entspricht."),
    (ER_EXPECTED_STEP_PATTERN, "Es wurde ein Schrittmuster erwartet, aber '/' festgestellt."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Es wurde ein Muster eines relativen Pfads erwartet."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPathResult des XPath-Ausdrucks ''{0}'' hat einen XPathResultType von {1}, der nicht in einen Booleschen Wert konvertiert werden kann."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPathResult des XPath-Ausdrucks ''{0}'' hat einen XPathResultType von {1}, der nicht in einen Einzelknoten konvertiert werden kann. Die Methode getSingleNodeValue gilt nur für die Typen ANY_UNORDERED_NODE_TYPE und FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "Die Methode getSnapshotLength kann nicht für XPathResult des XPath-Ausdrucks ''{0}'' aufgerufen werden, weil der zugehörige XPathResultType {1} ist. Diese Methode gilt nur für die Typen UNORDERED_NODE_SNAPSHOT_TYPE und ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "Die Methode iterateNext kann nicht für XPathResult des XPath-Ausdrucks ''{0}'' aufgerufen werden, weil der zugehörige XPathResultType {1} ist. Diese Methode gilt nur für die Typen UNORDERED_NODE_ITERATOR_TYPE und ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Das Dokument wurde geändert, seit das Ergebnis zurückgegeben wurde. Der Iterator ist ungültig."),
    (ER_INVALID_XPATH_TYPE, "Ungültiges XPath-Typargument: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Leeres XPath-Ergebnisobjekt"),
    (ER_INCOMPATIBLE_TYPES, "XPathResult des XPath-Ausdrucks ''{0}'' hat einen XPathResultType von {1}, der nicht in den angegebenen XPathResultType {2} umgewandelt werden kann."),
    (ER_NULL_RESOLVER, "Das Präfix kann nicht mit einer Präfixauflösungsfunktion mit Nullwert aufgelöst werden."),
    (ER_CANT_CONVERT_TO_STRING, "XPathResult des XPath-Ausdrucks ''{0}'' hat einen XPathResultType von {1}, der nicht in eine Zeichenfolge konvertiert werden kann."),
    (ER_NON_SNAPSHOT_TYPE, "Die Methode snapshotItem kann nicht für XPathResult des XPath-Ausdrucks ''{0}'' aufgerufen werden, weil der zugehörige XPathResultType {1} ist. Diese Methode gilt nur für die Typen UNORDERED_NODE_SNAPSHOT_TYPE und ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Der Kontextknoten gehört nicht zu dem Dokument, das an diesen XPathEvaluator gebunden ist."),
    (ER_WRONG_NODETYPE, "Der Kontextknotentyp wird nicht unterstützt."),
    (ER_XPATH_ERROR, "Unbekannter Fehler in XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPathResult des XPath-Ausdrucks ''{0}'' hat einen XPathResultType von {1}, der nicht in eine Zahl konvertiert werden kann"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Erweiterungsfunktion: ''{0}'' kann nicht aufgerufen werden, wenn die Funktion XMLConstants.FEATURE_SECURE_PROCESSING auf true gesetzt ist."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable für Variable {0} gibt null zurück"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nicht unterstützter Rückgabetyp: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Quellen- und/oder Rückgabetyp dürfen nicht null sein"),
    (ER_ARG_CANNOT_BE_NULL, "Das Argument {0} darf nicht null sein"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) kann nicht mit objectModel == null aufgerufen werden"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) kann nicht mit objectModel == \"\" aufgerufen werden"),
    (ER_FEATURE_NAME_NULL, "Es wird versucht, eine Funktion mit einem Nullnamen festzulegen: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Es wird versucht, die unbekannte Funktion \"{0}\" festzulegen:{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Es wird versucht, eine Funktion mit einem Nullnamen abzurufen: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Es wird versucht, die unbekannte Funktion \"{0}\" abzurufen:{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Es wird versucht, einen Null-XPathFunctionResolver festzulegen:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Es wird versucht, einen Null-XPathVariableResolver festzulegen:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "Der Name der Ländereinstellung in der Funktion format-number wurde bisher nicht bearbeitet!"),
    (WG_PROPERTY_NOT_SUPPORTED, "XSL-Merkmal wird nicht unterstützt: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Derzeit keine Aktion mit dem Namensbereich {0} in Merkmal {1} durchführen"),
    (WG_SECURITY_EXCEPTION, "SecurityException beim Zugriff auf XSL-Systemmerkmal: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Veraltete Syntax: quo(...) ist nicht mehr in XPath definiert."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath benötigt ein abgeleitetes Objekt, um nodeTest zu implementieren!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "Funktionstoken wurde nicht gefunden."),
    (WG_COULDNOT_FIND_FUNCTION, "Die Funktion konnte nicht gefunden werden: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "URL konnte nicht erstellt werden aus: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Option -E wird für DTM-Parser nicht unterstützt"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "VariableReference für Variable außerhalb des Kontexts oder ohne Definition angegeben!  Name = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nicht unterstützte Codierung: {0}"),
    // UI strings
    (UI_LANGUAGE, "de"),
    (HELP_LANGUAGE, "de"),
    (LANGUAGE, "de"),
    (BAD_CODE, "Der Parameter für createMessage lag außerhalb des gültigen Bereichs"),
    (FORMAT_FAILED, "Während des Aufrufs von messageFormat wurde eine Ausnahme ausgelöst"),
    (VERSION, ">>>>>>> Xalan-Version "),
    (VERSION2, "<<<<<<<"),
    (YES, "ja"),
    (LINE, "Zeile #"),
    (COLUMN, "Spalte #"),
    (XSLDONE, "XSLProcessor: fertig"),
    (XPATH_OPTION, "XPath-Optionen: "),
    (OPTION_IN, "   [-in EingabeXMLURL]"),
    (OPTION_SELECT, "   [-select XPath-Ausdruck]"),
    (OPTION_MATCH, "   [-match Übereinstimmungsmuster (für Übereinstimmungsdiagnose)]"),
    (OPTION_ANY_EXPR, "Oder nur ein XPath-Ausdruck führt einen Diagnosespeicherauszug aus"),
    (NO_PARSER_MSG1, "XSL-Prozess konnte nicht erfolgreich durchgeführt werden."),
    (NO_PARSER_MSG2, "** Parser konnte nicht gefunden werden **"),
    (NO_PARSER_MSG3, "Bitte den Klassenpfad überprüfen."),
    (NO_PARSER_MSG4, "Wenn Sie nicht über einen IBM XML-Parser für Java verfügen, können Sie ihn herunterladen:"),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Fehler: "),
    (WARNING_HEADER, "Warnung: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "MUSTER "),
];
