// SPDX-License-Identifier: PMPL-1.0-or-later

//! Slovak.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "Funkcia current() nie je povolená vo vzore zhody!"),
    (ER_CURRENT_TAKES_NO_ARGS, "Funkcia current() neprijíma argumenty!"),
    (ER_DOCUMENT_REPLACED, "Implementácia funkcie document() bola nahradená triedou org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Kontext nemá dokument vlastníka!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "Funkcia local-name() má príliš veľa argumentov."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "Funkcia namespace-uri() má príliš veľa argumentov."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "Funkcia normalize-space() má príliš veľa argumentov."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "Funkcia number() má príliš veľa argumentov."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "Funkcia name() má príliš veľa argumentov."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "Funkcia string() má príliš veľa argumentov."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "Funkcia string-length() má príliš veľa argumentov."),
    (ER_TRANSLATE_TAKES_3_ARGS, "Funkcia translate() vyžaduje tri argumenty!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Funkcia unparsed-entity-uri by mala mať jeden argument!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Os namespace ešte nie je implementovaná!"),
    (ER_UNKNOWN_AXIS, "neznáma os: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "neznáma operácia zhody!"),
    (ER_INCORRECT_ARG_LENGTH, "Dĺžka argumentu testu uzla processing-instruction() je nesprávna!"),
    (ER_CANT_CONVERT_TO_NUMBER, "Nie je možné konvertovať {0} na číslo"),
    (ER_CANT_CONVERT_TO_NODELIST, "Nie je možné konvertovať {0} na NodeList!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "Nie je možné konvertovať {0} na NodeSetDTM!"),
    (ER_CANT_CONVERT_TO_TYPE, "Nie je možné konvertovať {0} na type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "V getMatchScore sa očakával vzor zhody!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Nie je možné získať premennú s názvom {0}"),
    (ER_UNKNOWN_OPCODE, "CHYBA! Neznámy operačný kód: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Nadbytočné nepovolené tokeny: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Nesprávne uzavretý literál... očakávali sa úvodzovky!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Nesprávne uzavretý literál... očakával sa apostrof!"),
    (ER_EMPTY_EXPRESSION, "Prázdny výraz!"),
    (ER_EXPECTED_BUT_FOUND, "Očakávalo sa {0}, ale našlo sa: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Programátorské tvrdenie je nesprávne! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "Argument boolean(...) už nie je v koncepte 19990709 XPath voliteľný."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "Našla sa čiarka ',', ale žiadny predchádzajúci argument!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "Našla sa čiarka ',', ale žiadny nasledujúci argument!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predikát]' alebo '.[predikát]' je nepovolená syntax.  Použite namiesto toho 'self::node()[predikát]'."),
    (ER_ILLEGAL_AXIS_NAME, "nepovolený názov osi: {0}"),
    (ER_UNKNOWN_NODETYPE, "Neznámy typ uzla: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Literál vzoru ({0}) musí byť v úvodzovkách!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} nie je možné naformátovať na číslo!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Nie je možné vytvoriť väzbu XML TransformerFactory: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Chyba! Nenašiel sa výraz výberu xpath (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "CHYBA! Nie je možné nájsť ENDOP po OP_LOCATIONPATH"),
    (ER_ERROR_OCCURED, "Vyskytla sa chyba!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "VariableReference zadaná pre premennú mimo kontextu alebo bez definície!  Názov = {0}"),
    (ER_AXES_NOT_ALLOWED, "Vo vzoroch zhody sú povolené iba osi child:: a attribute::!  Chybné osi = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "Funkcia key() má nesprávny počet argumentov."),
    (ER_COUNT_TAKES_1_ARG, "Funkcia count by mala mať jeden argument!"),
    (ER_COULDNOT_FIND_FUNCTION, "Nie je možné nájsť funkciu: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nepodporované kódovanie: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "V DTM sa v getNextSibling vyskytol problém... prebieha pokus o obnovu"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Chyba programátora: do EmptyNodeList nie je možné zapisovať."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "Metóda setDOMFactory nie je v XPathContext podporovaná!"),
    (ER_PREFIX_MUST_RESOLVE, "Predpona sa musí rozlíšiť na menný priestor: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "Metóda parse (InputSource source) nie je v XPathContext podporovaná! Nie je možné otvoriť {0}"),
    (ER_SAX_API_NOT_HANDLED, "Rozhranie SAX API characters(char ch[]... nie je spracované v DTM!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "Metóda ignorableWhitespace(char ch[]... nie je spracovaná v DTM!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison nemôže spracovať uzly typu {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper nemôže spracovať uzly typu {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Chyba DOM2Helper.parse: SystemID - {0} riadok - {1}"),
    (ER_XERCES_PARSE_ERROR, "Chyba DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Bola zistená neplatná náhrada UTF-16: {0} ?"),
    (ER_OIERROR, "Chyba vstupu/výstupu"),
    (ER_CANNOT_CREATE_URL, "Nie je možné vytvoriť URL pre: {0}"),
    (ER_XPATH_READOBJECT, "V XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "Nenašiel sa token funkcie."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Nie je možné pracovať s typom XPath: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Táto sada NodeSet nie je meniteľná"),
    (ER_NODESETDTM_NOT_MUTABLE, "Táto sada NodeSetDTM nie je meniteľná"),
    (ER_VAR_NOT_RESOLVABLE, "Premennú nie je možné rozlíšiť: {0}"),
    (ER_NULL_ERROR_HANDLER, "Obslužná rutina chýb má hodnotu null"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programátorské tvrdenie: neznámy operačný kód: {0}"),
    (ER_ZERO_OR_ONE, "0 alebo 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia rtf() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia asNodeIterator() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia detach() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia num() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia xstr() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkcia str() nie je podporovaná triedou XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "Funkcia fsb() nie je podporovaná pre XStringForChars"),
    (ER_COULD_NOT_FIND_VAR, "Nie je možné nájsť premennú s názvom {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars nemôže ako argument prijať reťazec"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "Argument FastStringBuffer nemôže mať hodnotu null"),
    (ER_TWO_OR_THREE, "2 alebo 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "K premennej sa pristupovalo skôr, než bola zviazaná!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB nemôže ako argument prijať reťazec!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Chyba! Nastavenie koreňa objektu walker na hodnotu null!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Táto sada NodeSetDTM nemôže iterovať na predchádzajúci uzol!"),
    (ER_NODESET_CANNOT_ITERATE, "Táto sada NodeSet nemôže iterovať na predchádzajúci uzol!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Táto sada NodeSetDTM nemôže vykonávať funkcie indexovania alebo počítania!"),
    (ER_NODESET_CANNOT_INDEX, "Táto sada NodeSet nemôže vykonávať funkcie indexovania alebo počítania!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Nie je možné volať setShouldCacheNodes po volaní nextNode!"),
    (ER_ONLY_ALLOWS, "{0} povoľuje iba tento počet argumentov: {1}"),
    (ER_UNKNOWN_STEP, "Programátorské tvrdenie v getNextStepPos: neznámy stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Po tokene '/' alebo '//' sa očakávala relatívna cesta umiestnenia."),
    (ER_EXPECTED_LOC_PATH, "Očakávala sa cesta umiestnenia, ale našiel sa koniec výrazu XPath."),
    (ER_EXPECTED_LOC_STEP, "Po tokene '/' alebo '//' sa očakával krok umiestnenia."),
    (ER_EXPECTED_NODE_TEST, "Očakával sa test uzla, ktorý zodpovedá buď NCName:*, alebo QName."),
    (ER_EXPECTED_STEP_PATTERN, "Očakával sa vzor kroku, ale našiel sa znak '/'."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Očakával sa vzor relatívnej cesty."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, ktorý nie je možné konvertovať na typ boolean."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, ktorý nie je možné konvertovať na jeden uzol. Metóda getSingleNodeValue sa vzťahuje iba na typy ANY_UNORDERED_NODE_TYPE a FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "Metódu getSnapshotLength nie je možné volať na XPathResult výrazu XPath ''{0}'', pretože jeho typ XPathResultType je {1}. Táto metóda sa vzťahuje iba na typy UNORDERED_NODE_SNAPSHOT_TYPE a ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "Metódu iterateNext nie je možné volať na XPathResult výrazu XPath ''{0}'', pretože jeho typ XPathResultType je {1}. Táto metóda sa vzťahuje iba na typy UNORDERED_NODE_ITERATOR_TYPE a ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Dokument bol od vrátenia výsledku zmenený. Iterátor je neplatný."),
    (ER_INVALID_XPATH_TYPE, "Neplatný argument typu XPath: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Prázdny objekt výsledku XPath"),
    (ER_INCOMPATIBLE_TYPES, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, ktorý nie je možné vynútiť do zadaného typu XPathResultType {2}."),
    (ER_NULL_RESOLVER, "Predponu nie je možné rozlíšiť pomocou prekladača predpôn s hodnotou null."),
    (ER_CANT_CONVERT_TO_STRING, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, ktorý nie je možné konvertovať na reťazec."),
    (ER_NON_SNAPSHOT_TYPE, "Metódu snapshotItem nie je možné volať na XPathResult výrazu XPath ''{0}'', pretože jeho typ XPathResultType je {1}. Táto metóda sa vzťahuje iba na typy UNORDERED_NODE_SNAPSHOT_TYPE a ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Kontextový uzol nepatrí do dokumentu, ktorý je zviazaný s týmto objektom XPathEvaluator."),
    (ER_WRONG_NODETYPE, "Typ kontextového uzla nie je podporovaný."),
    (ER_XPATH_ERROR, "Neznáma chyba v XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, ktorý nie je možné konvertovať na číslo"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Funkciu rozšírenia ''{0}'' nie je možné vyvolať, ak je vlastnosť XMLConstants.FEATURE_SECURE_PROCESSING nastavená na hodnotu true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable pre premennú {0} vracia hodnotu null"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nepodporovaný návratový typ: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Zdrojový alebo návratový typ nemôže mať hodnotu null"),
    (ER_ARG_CANNOT_BE_NULL, "Argument {0} nemôže mať hodnotu null"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) nie je možné volať s objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) nie je možné volať s objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Pokus o nastavenie vlastnosti s názvom null: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Pokus o nastavenie neznámej vlastnosti \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Pokus o získanie vlastnosti s názvom null: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Pokus o získanie neznámej vlastnosti \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Pokus o nastavenie XPathFunctionResolver s hodnotou null:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Pokus o nastavenie XPathVariableResolver s hodnotou null:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "Názov miestneho nastavenia vo funkcii format-number ešte nie je spracovaný!"),
    (WG_PROPERTY_NOT_SUPPORTED, "Vlastnosť XSL nie je podporovaná: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "S menným priestorom {0} vo vlastnosti {1} sa momentálne nič nerobí"),
    (WG_SECURITY_EXCEPTION, "Pri pokuse o prístup k systémovej vlastnosti XSL sa vyskytla výnimka SecurityException: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Stará syntax: quo(...) už nie je v XPath definované."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath potrebuje na implementáciu nodeTest odvodený objekt!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "Nenašiel sa token funkcie."),
    (WG_COULDNOT_FIND_FUNCTION, "Nie je možné nájsť funkciu: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Nie je možné vytvoriť URL z: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Voľba -E nie je pre analyzátor DTM podporovaná"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "VariableReference zadaná pre premennú mimo kontextu alebo bez definície!  Názov = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nepodporované kódovanie: {0}"),
    // UI strings
    (UI_LANGUAGE, "sk"),
    (HELP_LANGUAGE, "sk"),
    (LANGUAGE, "sk"),
    (BAD_CODE, "Parameter funkcie createMessage je mimo rozsahu"),
    (FORMAT_FAILED, "Počas volania messageFormat bola vyvolaná výnimka"),
    (VERSION, ">>>>>>> Verzia Xalan "),
    (VERSION2, "<<<<<<<"),
    (YES, "áno"),
    (LINE, "Riadok #"),
    (COLUMN, "Stĺpec #"),
    (XSLDONE, "XSLProcessor: hotovo"),
    (XPATH_OPTION, "voľby xpath: "),
    (OPTION_IN, "   [-in vstupnéXMLURL]"),
    (OPTION_SELECT, "   [-select výraz xpath]"),
    (OPTION_MATCH, "   [-match vzor zhody (pre diagnostiku zhody)]"),
    (OPTION_ANY_EXPR, "Alebo iba výraz xpath vykoná diagnostický výpis"),
    (NO_PARSER_MSG1, "Proces XSL nebol úspešný."),
    (NO_PARSER_MSG2, "** Nie je možné nájsť analyzátor **"),
    (NO_PARSER_MSG3, "Skontrolujte cestu k triedam."),
    (NO_PARSER_MSG4, "Ak nemáte analyzátor XML pre jazyk Java od spoločnosti IBM, môžete si ho stiahnuť z adresy"),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Chyba: "),
    (WARNING_HEADER, "Varovanie: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "VZOR "),
];
