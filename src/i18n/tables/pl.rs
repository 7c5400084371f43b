// SPDX-License-Identifier: PMPL-1.0-or-later

//! Polish.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "Funkcja current() jest niedozwolona we wzorcu dopasowania!"),
    (ER_CURRENT_TAKES_NO_ARGS, "Funkcja current() nie akceptuje argumentów!"),
    (ER_DOCUMENT_REPLACED, "Implementacja funkcji document() została zastąpiona przez org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Kontekst nie ma dokumentu właściciela!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "Funkcja local-name() ma zbyt wiele argumentów."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "Funkcja namespace-uri() ma zbyt wiele argumentów."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "Funkcja normalize-space() ma zbyt wiele argumentów."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "Funkcja number() ma zbyt wiele argumentów."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "Funkcja name() ma zbyt wiele argumentów."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "Funkcja string() ma zbyt wiele argumentów."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "Funkcja string-length() ma zbyt wiele argumentów."),
    (ER_TRANSLATE_TAKES_3_ARGS, "Funkcja translate() wymaga trzech argumentów!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Funkcja unparsed-entity-uri powinna mieć jeden argument!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Oś przestrzeni nazw nie została jeszcze zaimplementowana!"),
    (ER_UNKNOWN_AXIS, "Nieznana oś: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "Nieznana operacja dopasowania!"),
    (ER_INCORRECT_ARG_LENGTH, "Długość argumentu testu węzła processing-instruction() jest niepoprawna!"),
    (ER_CANT_CONVERT_TO_NUMBER, "Nie można przekształcić {0} w liczbę"),
    (ER_CANT_CONVERT_TO_NODELIST, "Nie można przekształcić {0} w NodeList!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "Nie można przekształcić {0} w NodeSetDTM!"),
    (ER_CANT_CONVERT_TO_TYPE, "Nie można przekształcić {0} w type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "Oczekiwano wzorca dopasowania w getMatchScore!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Nie można pobrać zmiennej o nazwie {0}"),
    (ER_UNKNOWN_OPCODE, "BŁĄD! Nieznany kod operacji: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Nadmiarowe niedozwolone leksemy: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Literał bez cudzysłowu... oczekiwano podwójnego cudzysłowu!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Literał bez cudzysłowu... oczekiwano pojedynczego cudzysłowu!"),
    (ER_EMPTY_EXPRESSION, "Puste wyrażenie!"),
    (ER_EXPECTED_BUT_FOUND, "Oczekiwano {0}, ale znaleziono: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Asercja programisty jest niepoprawna! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "Argument boolean(...) nie jest już opcjonalny w projekcie XPath 19990709."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "Znaleziono ',', ale brak poprzedzającego argumentu!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "Znaleziono ',', ale brak następującego argumentu!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predykat]' lub '.[predykat]' to niedozwolona składnia.  Użyj zamiast tego 'self::node()[predykat]'."),
    (ER_ILLEGAL_AXIS_NAME, "Niedozwolona nazwa osi: {0}"),
    (ER_UNKNOWN_NODETYPE, "Nieznany typ węzła: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Literał wzorca ({0}) musi być w cudzysłowie!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "Nie można sformatować {0} do postaci liczbowej!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Nie można utworzyć połączenia XML TransformerFactory: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Błąd! Nie znaleziono wyrażenia wyboru xpath (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "BŁĄD! Nie można znaleźć ENDOP po OP_LOCATIONPATH"),
    (ER_ERROR_OCCURED, "Wystąpił błąd!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "Podano VariableReference dla zmiennej spoza kontekstu lub bez definicji!  Nazwa = {0}"),
    (ER_AXES_NOT_ALLOWED, "We wzorcach dopasowania dozwolone są tylko osie child:: i attribute::!  Niewłaściwe osie = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "Funkcja key() ma niepoprawną liczbę argumentów."),
    (ER_COUNT_TAKES_1_ARG, "Funkcja count powinna mieć jeden argument!"),
    (ER_COULDNOT_FIND_FUNCTION, "Nie można znaleźć funkcji: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nieobsługiwane kodowanie: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "Wystąpił problem w DTM w getNextSibling... próba wyjścia z błędu"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Błąd programisty: nie można zapisywać do EmptyNodeList."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "Metoda setDOMFactory nie jest obsługiwana przez XPathContext!"),
    (ER_PREFIX_MUST_RESOLVE, "Przedrostek musi dać się przetłumaczyć na przestrzeń nazw: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "Metoda parse (InputSource source) nie jest obsługiwana w XPathContext! Nie można otworzyć {0}"),
    (ER_SAX_API_NOT_HANDLED, "Funkcja SAX API characters(char ch[]... nie jest obsługiwana przez DTM!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "Funkcja ignorableWhitespace(char ch[]... nie jest obsługiwana przez DTM!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison nie może obsłużyć węzłów typu {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper nie może obsłużyć węzłów typu {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Błąd DOM2Helper.parse: ID systemu - {0} wiersz - {1}"),
    (ER_XERCES_PARSE_ERROR, "Błąd DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Wykryto niepoprawny odpowiednik UTF-16: {0} ?"),
    (ER_OIERROR, "Błąd we/wy"),
    (ER_CANNOT_CREATE_URL, "Nie można utworzyć adresu URL dla {0}"),
    (ER_XPATH_READOBJECT, "W XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "Nie znaleziono leksemu funkcji."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Nie można obsłużyć typu XPath: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Ten NodeSet nie jest zmienny"),
    (ER_NODESETDTM_NOT_MUTABLE, "Ten NodeSetDTM nie jest zmienny"),
    (ER_VAR_NOT_RESOLVABLE, "Nie można przetłumaczyć zmiennej: {0}"),
    (ER_NULL_ERROR_HANDLER, "Pusta procedura obsługi błędów"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Asercja programisty: nieznany kod operacji: {0}"),
    (ER_ZERO_OR_ONE, "0 lub 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja rtf() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja asNodeIterator() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja detach() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja num() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja xstr() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcja str() nie jest obsługiwana przez XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "Funkcja fsb() nie jest obsługiwana dla XStringForChars"),
    (ER_COULD_NOT_FIND_VAR, "Nie można znaleźć zmiennej o nazwie {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars nie może pobrać łańcucha jako argumentu"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "Argument FastStringBuffer nie może być pusty"),
    (ER_TWO_OR_THREE, "2 lub 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Odwołanie do zmiennej przed jej związaniem!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB nie może pobrać łańcucha jako argumentu!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Błąd! Ustawianie pustego elementu głównego obiektu walker!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Ten NodeSetDTM nie może iterować do poprzedniego węzła!"),
    (ER_NODESET_CANNOT_ITERATE, "Ten NodeSet nie może iterować do poprzedniego węzła!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Ten NodeSetDTM nie może wykonywać funkcji indeksowania ani zliczania!"),
    (ER_NODESET_CANNOT_INDEX, "Ten NodeSet nie może wykonywać funkcji indeksowania ani zliczania!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Nie można wywołać setShouldCacheNodes po wywołaniu nextNode!"),
    (ER_ONLY_ALLOWS, "{0} zezwala tylko na {1} argumentów"),
    (ER_UNKNOWN_STEP, "Asercja programisty w getNextStepPos: nieznany stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Po leksemie '/' lub '//' oczekiwano względnej ścieżki położenia."),
    (ER_EXPECTED_LOC_PATH, "Oczekiwano ścieżki położenia, ale zamiast niej znaleziono koniec wyrażenia XPath."),
    (ER_EXPECTED_LOC_STEP, "Po leksemie '/' lub '//' oczekiwano kroku położenia."),
    (ER_EXPECTED_NODE_TEST, "Oczekiwano testu węzła zgodnego z NCName:* lub QName."),
    (ER_EXPECTED_STEP_PATTERN, "Oczekiwano wzorca kroku, ale napotkano '/'."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Oczekiwano wzorca ścieżki względnej."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPathResult wyrażenia XPath ''{0}'' ma typ XPathResultType {1}, którego nie można przekształcić w wartość boolowską."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPathResult wyrażenia XPath ''{0}'' ma typ XPathResultType {1}, którego nie można przekształcić w pojedynczy węzeł. Metoda getSingleNodeValue ma zastosowanie tylko do typów ANY_UNORDERED_NODE_TYPE i FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "Metody getSnapshotLength nie można wywołać dla XPathResult wyrażenia XPath ''{0}'', ponieważ jego typem XPathResultType jest {1}. Ta metoda ma zastosowanie tylko do typów UNORDERED_NODE_SNAPSHOT_TYPE i ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "Metody iterateNext nie można wywołać dla XPathResult wyrażenia XPath ''{0}'', ponieważ jego typem XPathResultType jest {1}. Ta metoda ma zastosowanie tylko do typów UNORDERED_NODE_ITERATOR_TYPE i ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Dokument został zmieniony od czasu zwrócenia wyniku. Iterator jest niepoprawny."),
    (ER_INVALID_XPATH_TYPE, "Niepoprawny argument typu XPath: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Pusty obiekt wyniku XPath"),
    (ER_INCOMPATIBLE_TYPES, "XPathResult wyrażenia XPath ''{0}'' ma typ XPathResultType {1}, którego nie można wymusić na podanym typie XPathResultType {2}."),
    (ER_NULL_RESOLVER, "Nie można przetłumaczyć przedrostka za pomocą pustego programu tłumaczącego przedrostki."),
    (ER_CANT_CONVERT_TO_STRING, "XPathResult wyrażenia XPath ''{0}'' ma typ XPathResultType {1}, którego nie można przekształcić w łańcuch."),
    (ER_NON_SNAPSHOT_TYPE, "Metody snapshotItem nie można wywołać dla XPathResult wyrażenia XPath ''{0}'', ponieważ jego typem XPathResultType jest {1}. Ta metoda ma zastosowanie tylko do typów UNORDERED_NODE_SNAPSHOT_TYPE i ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Węzeł kontekstu nie należy do dokumentu, który jest związany z tym XPathEvaluator."),
    (ER_WRONG_NODETYPE, "Typ węzła kontekstu nie jest obsługiwany."),
    (ER_XPATH_ERROR, "Nieznany błąd w XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPathResult wyrażenia XPath ''{0}'' ma typ XPathResultType {1}, którego nie można przekształcić w liczbę"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Nie można wywołać funkcji rozszerzenia ''{0}'', gdy opcja XMLConstants.FEATURE_SECURE_PROCESSING ma wartość true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable dla zmiennej {0} zwraca wartość null"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nieobsługiwany typ zwracany: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Typ źródłowy i/lub zwracany nie może mieć wartości null"),
    (ER_ARG_CANNOT_BE_NULL, "Argument {0} nie może mieć wartości null"),
    (ER_OBJECT_MODEL_NULL, "Nie można wywołać {0}#isObjectModelSupported( String objectModel ) z objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "Nie można wywołać {0}#isObjectModelSupported( String objectModel ) z objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Próba ustawienia opcji o nazwie null: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Próba ustawienia nieznanej opcji \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Próba pobrania opcji o nazwie null: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Próba pobrania nieznanej opcji \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Próba ustawienia XPathFunctionResolver o wartości null:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Próba ustawienia XPathVariableResolver o wartości null:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "Nazwa ustawień narodowych w funkcji format-number nie jest jeszcze obsługiwana!"),
    (WG_PROPERTY_NOT_SUPPORTED, "Nieobsługiwana właściwość XSL: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Obecnie nic nie jest robione z przestrzenią nazw {0} we właściwości {1}"),
    (WG_SECURITY_EXCEPTION, "Wyjątek SecurityException podczas próby dostępu do właściwości systemowej XSL: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Stara składnia: quo(...) nie jest już zdefiniowana w XPath."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath potrzebuje obiektu pochodnego do implementacji nodeTest!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "Nie znaleziono leksemu funkcji."),
    (WG_COULDNOT_FIND_FUNCTION, "Nie można znaleźć funkcji: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Nie można utworzyć adresu URL z {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Opcja -E nie jest obsługiwana przez analizator DTM"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "Podano VariableReference dla zmiennej spoza kontekstu lub bez definicji!  Nazwa = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nieobsługiwane kodowanie: {0}"),
    // UI strings
    (UI_LANGUAGE, "pl"),
    (HELP_LANGUAGE, "pl"),
    (LANGUAGE, "pl"),
    (BAD_CODE, "Parametr createMessage był spoza zakresu"),
    (FORMAT_FAILED, "Podczas wywołania messageFormat zgłoszony został wyjątek"),
    (VERSION, ">>>>>>> Wersja Xalan "),
    (VERSION2, "<<<<<<<"),
    (YES, "tak"),
    (LINE, "Wiersz #"),
    (COLUMN, "Kolumna #"),
    (XSLDONE, "XSLProcessor: gotowe"),
    (XPATH_OPTION, "opcje xpath: "),
    (OPTION_IN, "   [-in wejściowyXMLURL]"),
    (OPTION_SELECT, "   [-select wyrażenie xpath]"),
    (OPTION_MATCH, "   [-match wzorzec dopasowania (dla diagnostyki dopasowania)]"),
    (OPTION_ANY_EXPR, "Lub tylko wyrażenie xpath wykona zrzut diagnostyczny"),
    (NO_PARSER_MSG1, "Proces XSL nie wykonał się pomyślnie."),
    (NO_PARSER_MSG2, "** Nie można znaleźć analizatora **"),
    (NO_PARSER_MSG3, "Sprawdź ścieżkę klasy."),
    (NO_PARSER_MSG4, "Jeśli nie masz analizatora XML dla języka Java firmy IBM, możesz go pobrać"),
    (NO_PARSER_MSG5, "z serwisu AlphaWorks firmy IBM: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Błąd: "),
    (WARNING_HEADER, "Ostrzeżenie: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "WZORZEC "),
];
