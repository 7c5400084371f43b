// SPDX-License-Identifier: PMPL-1.0-or-later

//! Czech.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "Funkce current() není povolena ve vzorku pro porovnávání!"),
    (ER_CURRENT_TAKES_NO_ARGS, "Funkce current() nepřijímá argumenty!"),
    (ER_DOCUMENT_REPLACED, "Implementace funkce document() byla nahrazena třídou org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Kontext nemá dokument vlastníka!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "Funkce local-name() má příliš mnoho argumentů."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "Funkce namespace-uri() má příliš mnoho argumentů."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "Funkce normalize-space() má příliš mnoho argumentů."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "Funkce number() má příliš mnoho argumentů."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "Funkce name() má příliš mnoho argumentů."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "Funkce string() má příliš mnoho argumentů."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "Funkce string-length() má příliš mnoho argumentů."),
    (ER_TRANSLATE_TAKES_3_ARGS, "Funkce translate() vyžaduje tři argumenty!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Funkce unparsed-entity-uri by měla mít jeden argument!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Osa namespace dosud není implementována!"),
    (ER_UNKNOWN_AXIS, "neznámá osa: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "neznámá operace porovnávání!"),
    (ER_INCORRECT_ARG_LENGTH, "Délka argumentu testu uzlu processing-instruction() je nesprávná!"),
    (ER_CANT_CONVERT_TO_NUMBER, "Nelze převést {0} na číslo"),
    (ER_CANT_CONVERT_TO_NODELIST, "Nelze převést {0} na NodeList!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "Nelze převést {0} na NodeSetDTM!"),
    (ER_CANT_CONVERT_TO_TYPE, "Nelze převést {0} na type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "V getMatchScore byl očekáván vzorek pro porovnávání!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Nelze získat proměnnou s názvem {0}"),
    (ER_UNKNOWN_OPCODE, "CHYBA! Neznámý operační kód: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Nadbytečné nepovolené tokeny: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Nesprávně uzavřený literál... očekávány uvozovky!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Nesprávně uzavřený literál... očekáván apostrof!"),
    (ER_EMPTY_EXPRESSION, "Prázdný výraz!"),
    (ER_EXPECTED_BUT_FOUND, "Očekáváno {0}, ale bylo nalezeno: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Programátorské tvrzení je nesprávné! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "Argument boolean(...) již není v konceptu 19990709 XPath volitelný."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "Byla nalezena čárka ',', ale žádný předcházející argument!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "Byla nalezena čárka ',', ale žádný následující argument!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predikát]' nebo '.[predikát]' je nepovolená syntaxe.  Použijte místo toho 'self::node()[predikát]'."),
    (ER_ILLEGAL_AXIS_NAME, "nepovolený název osy: {0}"),
    (ER_UNKNOWN_NODETYPE, "Neznámý typ uzlu: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Literál vzorku ({0}) musí být uzavřen v uvozovkách!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} nelze naformátovat na číslo!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Nelze vytvořit vazbu XML TransformerFactory: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Chyba! Nebyl nalezen výraz výběru xpath (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "CHYBA! Nelze najít ENDOP po OP_LOCATIONPATH"),
    (ER_ERROR_OCCURED, "Vyskytla se chyba!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "VariableReference zadaná pro proměnnou mimo kontext nebo bez definice!  Název = {0}"),
    (ER_AXES_NOT_ALLOWED, "Ve vzorcích pro porovnávání jsou povoleny pouze osy child:: a attribute::!  Chybné osy = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "Funkce key() má nesprávný počet argumentů."),
    (ER_COUNT_TAKES_1_ARG, "Funkce count by měla mít jeden argument!"),
    (ER_COULDNOT_FIND_FUNCTION, "Nelze najít funkci: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nepodporované kódování: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "V DTM se v getNextSibling vyskytl problém... probíhá pokus o obnovu"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Chyba programátora: do EmptyNodeList nelze zapisovat."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "Metoda setDOMFactory není v XPathContext podporována!"),
    (ER_PREFIX_MUST_RESOLVE, "Předpona se musí přeložit na obor názvů: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "Metoda parse (InputSource source) není v XPathContext podporována! Nelze otevřít {0}"),
    (ER_SAX_API_NOT_HANDLED, "Rozhraní SAX API characters(char ch[]... není zpracováno v DTM!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "Metoda ignorableWhitespace(char ch[]... není zpracována v DTM!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison nemůže zpracovat uzly typu {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper nemůže zpracovat uzly typu {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Chyba DOM2Helper.parse: SystemID - {0} řádek - {1}"),
    (ER_XERCES_PARSE_ERROR, "Chyba DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Byla zjištěna neplatná náhrada UTF-16: {0} ?"),
    (ER_OIERROR, "Chyba vstupu/výstupu"),
    (ER_CANNOT_CREATE_URL, "Nelze vytvořit adresu URL pro: {0}"),
    (ER_XPATH_READOBJECT, "V XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "Nebyl nalezen token funkce."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Nelze pracovat s typem XPath: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Tato sada NodeSet není měnitelná"),
    (ER_NODESETDTM_NOT_MUTABLE, "Tato sada NodeSetDTM není měnitelná"),
    (ER_VAR_NOT_RESOLVABLE, "Proměnnou nelze přeložit: {0}"),
    (ER_NULL_ERROR_HANDLER, "Obslužná rutina chyb má hodnotu null"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programátorské tvrzení: neznámý operační kód: {0}"),
    (ER_ZERO_OR_ONE, "0 nebo 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce rtf() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce asNodeIterator() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce detach() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce num() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce xstr() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "Funkce str() není podporována třídou XRTreeFragSelectWrapper"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "Funkce fsb() není podporována pro XStringForChars"),
    (ER_COULD_NOT_FIND_VAR, "Nelze najít proměnnou s názvem {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars nemůže jako argument přijmout řetězec"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "Argument FastStringBuffer nesmí mít hodnotu null"),
    (ER_TWO_OR_THREE, "2 nebo 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "K proměnné bylo přistoupeno dříve, než byla svázána!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB nemůže jako argument přijmout řetězec!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Chyba! Nastavení kořene objektu walker na hodnotu null!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Tato sada NodeSetDTM nemůže iterovat na předchozí uzel!"),
    (ER_NODESET_CANNOT_ITERATE, "Tato sada NodeSet nemůže iterovat na předchozí uzel!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Tato sada NodeSetDTM nemůže provádět funkce indexování nebo počítání!"),
    (ER_NODESET_CANNOT_INDEX, "Tato sada NodeSet nemůže provádět funkce indexování nebo počítání!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Nelze volat setShouldCacheNodes po volání nextNode!"),
    (ER_ONLY_ALLOWS, "{0} povoluje pouze tento počet argumentů: {1}"),
    (ER_UNKNOWN_STEP, "Programátorské tvrzení v getNextStepPos: neznámý stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Po tokenu '/' nebo '//' byla očekávána relativní cesta umístění."),
    (ER_EXPECTED_LOC_PATH, "Byla očekávána cesta umístění, ale byl nalezen konec výrazu XPath."),
    (ER_EXPECTED_LOC_STEP, "Po tokenu '/' nebo '//' byl očekáván krok umístění."),
    (ER_EXPECTED_NODE_TEST, "Byl očekáván test uzlu, který odpovídá buď NCName:*, nebo QName."),
    (ER_EXPECTED_STEP_PATTERN, "Byl očekáván vzorek kroku, ale byl nalezen znak '/'."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Byl očekáván vzorek relativní cesty."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, který nelze převést na typ boolean."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, který nelze převést na jeden uzel. Metoda getSingleNodeValue se vztahuje pouze na typy ANY_UNORDERED_NODE_TYPE a FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "Metodu getSnapshotLength nelze volat na XPathResult výrazu XPath ''{0}'', protože jeho typ XPathResultType je {1}. Tato metoda se vztahuje pouze na typy UNORDERED_NODE_SNAPSHOT_TYPE a ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "Metodu iterateNext nelze volat na XPathResult výrazu XPath ''{0}'', protože jeho typ XPathResultType je {1}. Tato metoda se vztahuje pouze na typy UNORDERED_NODE_ITERATOR_TYPE a ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Dokument byl od vrácení výsledku změněn. Iterátor je neplatný."),
    (ER_INVALID_XPATH_TYPE, "Neplatný argument typu XPath: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Prázdný objekt výsledku XPath"),
    (ER_INCOMPATIBLE_TYPES, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, který nelze vynutit do zadaného typu XPathResultType {2}."),
    (ER_NULL_RESOLVER, "Předponu nelze přeložit pomocí překladače předpon s hodnotou null."),
    (ER_CANT_CONVERT_TO_STRING, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, který nelze převést na řetězec."),
    (ER_NON_SNAPSHOT_TYPE, "Metodu snapshotItem nelze volat na XPathResult výrazu XPath ''{0}'', protože jeho typ XPathResultType je {1}. Tato metoda se vztahuje pouze na typy UNORDERED_NODE_SNAPSHOT_TYPE a ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Kontextový uzel nepatří do dokumentu, který je svázán s tímto objektem XPathEvaluator."),
    (ER_WRONG_NODETYPE, "Typ kontextového uzlu není podporován."),
    (ER_XPATH_ERROR, "Neznámá chyba v XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPathResult výrazu XPath ''{0}'' má typ XPathResultType {1}, který nelze převést na číslo"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Funkci rozšíření ''{0}'' nelze vyvolat, pokud je funkce XMLConstants.FEATURE_SECURE_PROCESSING nastavena na hodnotu true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable pro proměnnou {0} vrací hodnotu null"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nepodporovaný návratový typ: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Zdrojový nebo návratový typ nesmí mít hodnotu null"),
    (ER_ARG_CANNOT_BE_NULL, "Argument {0} nesmí mít hodnotu null"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) nelze volat s objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) nelze volat s objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Pokus o nastavení funkce s názvem null: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Pokus o nastavení neznámé funkce \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Pokus o získání funkce s názvem null: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Pokus o získání neznámé funkce \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Pokus o nastavení XPathFunctionResolver s hodnotou null:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Pokus o nastavení XPathVariableResolver s hodnotou null:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "Název národního prostředí ve funkci format-number dosud není zpracován!"),
    (WG_PROPERTY_NOT_SUPPORTED, "Vlastnost XSL není podporována: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "S oborem názvů {0} ve vlastnosti {1} se v současné době nic neprovádí"),
    (WG_SECURITY_EXCEPTION, "Při pokusu o přístup k systémové vlastnosti XSL došlo k výjimce SecurityException: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Stará syntaxe: quo(...) již není v XPath definováno."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath potřebuje k implementaci nodeTest odvozený objekt!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "Nebyl nalezen token funkce."),
    (WG_COULDNOT_FIND_FUNCTION, "Nelze najít funkci: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Nelze vytvořit adresu URL z: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Volba -E není pro analyzátor DTM podporována"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "VariableReference zadaná pro proměnnou mimo kontext nebo bez definice!  Název = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nepodporované kódování: {0}"),
    // UI strings
    (UI_LANGUAGE, "cs"),
    (HELP_LANGUAGE, "cs"),
    (LANGUAGE, "cs"),
    (BAD_CODE, "Parametr funkce createMessage je mimo rozsah"),
    (FORMAT_FAILED, "Během volání messageFormat byla vyvolána výjimka"),
    (VERSION, ">>>>>>> Verze Xalan "),
    (VERSION2, "<<<<<<<"),
    (YES, "ano"),
    (LINE, "Řádek #"),
    (COLUMN, "Sloupec #"),
    (XSLDONE, "XSLProcessor: dokončeno"),
    (XPATH_OPTION, "volby xpath: "),
    (OPTION_IN, "   [-in vstupníXMLURL]"),
    (OPTION_SELECT, "   [-select výraz xpath]"),
    (OPTION_MATCH, "   [-match vzorek pro porovnání (pro diagnostiku porovnávání)]"),
    (OPTION_ANY_EXPR, "Nebo pouze výraz xpath provede diagnostický výpis"),
    (NO_PARSER_MSG1, "Proces XSL nebyl úspěšný."),
    (NO_PARSER_MSG2, "** Nelze najít analyzátor **"),
    (NO_PARSER_MSG3, "Zkontrolujte cestu ke třídám."),
    (NO_PARSER_MSG4, "Pokud nemáte analyzátor XML pro jazyk Java od společnosti IBM, můžete si jej stáhnout z adresy"),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Chyba: "),
    (WARNING_HEADER, "Varování: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "VZOREK "),
];
