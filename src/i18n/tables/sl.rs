// SPDX-License-Identifier: PMPL-1.0-or-later

//! Slovenian.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "Funkcija current() v vzorcu ujemanja ni dovoljena!"),
    (ER_CURRENT_TAKES_NO_ARGS, "Funkcija current() ne sprejema argumentov!"),
    (ER_DOCUMENT_REPLACED, "Implementacija funkcije document() je bila nadomeščena z org.apache.xalan.xslt.FuncDocument!"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "Kontekst nima lastniškega dokumenta!"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "Funkcija local-name() ima preveč argumentov."),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "Funkcija namespace-uri() ima preveč argumentov."),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "Funkcija normalize-space() ima preveč argumentov."),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "Funkcija number() ima preveč argumentov."),
    (ER_NAME_HAS_TOO_MANY_ARGS, "Funkcija name() ima preveč argumentov."),
    (ER_STRING_HAS_TOO_MANY_ARGS, "Funkcija string() ima preveč argumentov."),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "Funkcija string-length() ima preveč argumentov."),
    (ER_TRANSLATE_TAKES_3_ARGS, "Funkcija translate() sprejme tri argumente!"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "Funkcija unparsed-entity-uri bi morala sprejeti en argument!"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "Os imenskega prostora še ni implementirana!"),
    (ER_UNKNOWN_AXIS, "neznana os: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "neznana operacija ujemanja!"),
    (ER_INCORRECT_ARG_LENGTH, "Dolžina argumenta preskusa vozlišča processing-instruction() ni pravilna!"),
    (ER_CANT_CONVERT_TO_NUMBER, "{0} ni mogoče pretvoriti v število"),
    (ER_CANT_CONVERT_TO_NODELIST, "{0} ni mogoče pretvoriti v NodeList!"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "{0} ni mogoče pretvoriti v NodeSetDTM!"),
    (ER_CANT_CONVERT_TO_TYPE, "{0} ni mogoče pretvoriti v type#{1}"),
    (ER_EXPECTED_MATCH_PATTERN, "V getMatchScore je bil pričakovan vzorec ujemanja!"),
    (ER_COULDNOT_GET_VAR_NAMED, "Ni mogoče pridobiti spremenljivke z imenom {0}"),
    (ER_UNKNOWN_OPCODE, "NAPAKA! Neznana operacijska koda: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "Dodatni nedovoljeni žetoni: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "Napačno navedena dobesedna vrednost... pričakovan je bil dvojni narekovaj!"),
    (ER_EXPECTED_SINGLE_QUOTE, "Napačno navedena dobesedna vrednost... pričakovan je bil enojni narekovaj!"),
    (ER_EMPTY_EXPRESSION, "Prazen izraz!"),
    (ER_EXPECTED_BUT_FOUND, "Pričakovano {0}, najdeno pa: {1}"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "Programerjeva trditev ni pravilna! - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "Argument boolean(...) v osnutku XPath 19990709 ni več izbiren."),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "Najdena vejica ',', vendar ni predhodnega argumenta!"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "Najdena vejica ',', vendar ni naslednjega argumenta!"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[predikat]' ali '.[predikat]' je nedovoljena sintaksa.  Namesto tega uporabite 'self::node()[predikat]'."),
    (ER_ILLEGAL_AXIS_NAME, "nedovoljeno ime osi: {0}"),
    (ER_UNKNOWN_NODETYPE, "Neznan tip vozlišča: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "Dobesedna vrednost vzorca ({0}) mora biti v narekovajih!"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} ni mogoče oblikovati v število!"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "Ni mogoče ustvariti povezave XML TransformerFactory: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "Napaka! Ni mogoče najti izraza izbire xpath (-select)."),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "NAPAKA! Za OP_LOCATIONPATH ni mogoče najti ENDOP"),
    (ER_ERROR_OCCURED, "Prišlo je do napake!"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "VariableReference je podan za spremenljivko, ki je zunaj konteksta ali nima definicije!  Ime = {0}"),
    (ER_AXES_NOT_ALLOWED, "V vzorcih ujemanja sta dovoljeni le osi child:: in attribute::!  Neustrezne osi = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "Funkcija key() ima nepravilno število argumentov."),
    (ER_COUNT_TAKES_1_ARG, "Funkcija count bi morala sprejeti en argument!"),
    (ER_COULDNOT_FIND_FUNCTION, "Ni mogoče najti funkcije: {0}"),
    (ER_UNSUPPORTED_ENCODING, "Nepodprto kodiranje: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "V DTM je prišlo do težave v getNextSibling... poskus obnovitve"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "Napaka programerja: v EmptyNodeList ni mogoče pisati."),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "XPathContext ne podpira metode setDOMFactory!"),
    (ER_PREFIX_MUST_RESOLVE, "Predpona se mora razrešiti v imenski prostor: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "XPathContext ne podpira razčlenitve (InputSource source)! {0} ni mogoče odpreti"),
    (ER_SAX_API_NOT_HANDLED, "DTM ne obravnava znakov SAX API (char ch[]...!"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "DTM ne obravnava ignorableWhitespace(char ch[]...!"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison ne more obravnavati vozlišč tipa {0}"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper ne more obravnavati vozlišč tipa {0}"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "Napaka DOM2Helper.parse: SystemID - {0} vrstica - {1}"),
    (ER_XERCES_PARSE_ERROR, "Napaka DOM2Helper.parse"),
    (ER_INVALID_UTF16_SURROGATE, "Zaznan neveljaven nadomestek UTF-16: {0} ?"),
    (ER_OIERROR, "Napaka V/I"),
    (ER_CANNOT_CREATE_URL, "Ni mogoče ustvariti URL-ja za: {0}"),
    (ER_XPATH_READOBJECT, "V XPath.readObject: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "Žetona funkcije ni mogoče najti."),
    (ER_CANNOT_DEAL_XPATH_TYPE, "Ni mogoče obravnavati tipa XPath: {0}"),
    (ER_NODESET_NOT_MUTABLE, "Ta NodeSet ni spremenljiv"),
    (ER_NODESETDTM_NOT_MUTABLE, "Ta NodeSetDTM ni spremenljiv"),
    (ER_VAR_NOT_RESOLVABLE, "Spremenljivke ni mogoče razrešiti: {0}"),
    (ER_NULL_ERROR_HANDLER, "Ničelna rutina za obravnavo napak"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "Programerjeva trditev: neznana operacijska koda: {0}"),
    (ER_ZERO_OR_ONE, "0 ali 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije rtf()"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije asNodeIterator()"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije detach()"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije num()"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije xstr()"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "XRTreeFragSelectWrapper ne podpira funkcije str()"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "XStringForChars ne podpira funkcije fsb()"),
    (ER_COULD_NOT_FIND_VAR, "Ni mogoče najti spremenljivke z imenom {0}"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars ne more sprejeti niza kot argument"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "Argument FastStringBuffer ne sme biti ničelen"),
    (ER_TWO_OR_THREE, "2 ali 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "Do spremenljivke je bil izveden dostop, preden je bila povezana!"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB ne more sprejeti niza kot argument!"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! Napaka! Nastavitev korena sprehajalca na ničelno vrednost!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "Ta NodeSetDTM ne more iterirati do predhodnega vozlišča!"),
    (ER_NODESET_CANNOT_ITERATE, "Ta NodeSet ne more iterirati do predhodnega vozlišča!"),
    (ER_NODESETDTM_CANNOT_INDEX, "Ta NodeSetDTM ne more izvajati funkcij indeksiranja ali štetja!"),
    (ER_NODESET_CANNOT_INDEX, "Ta NodeSet ne more izvajati funkcij indeksiranja ali štetja!"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "Po klicu nextNode ni mogoče klicati setShouldCacheNodes!"),
    (ER_ONLY_ALLOWS, "{0} dovoljuje le naslednje število argumentov: {1}"),
    (ER_UNKNOWN_STEP, "Programerjeva trditev v getNextStepPos: neznan stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "Za žetonom '/' ali '//' je bila pričakovana relativna pot lokacije."),
    (ER_EXPECTED_LOC_PATH, "Pričakovana je bila pot lokacije, najden pa je bil konec izraza XPath."),
    (ER_EXPECTED_LOC_STEP, "Za žetonom '/' ali '//' je bil pričakovan korak lokacije."),
    (ER_EXPECTED_NODE_TEST, "Pričakovan je bil preskus vozlišča, ki ustreza NCName:* ali QName."),
    (ER_EXPECTED_STEP_PATTERN, "Pričakovan je bil vzorec koraka, najden pa je bil '/'."),
    (ER_EXPECTED_REL_PATH_PATTERN, "Pričakovan je bil vzorec relativne poti."),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPathResult izraza XPath ''{0}'' ima XPathResultType {1}, ki ga ni mogoče pretvoriti v logično vrednost."),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPathResult izraza XPath ''{0}'' ima XPathResultType {1}, ki ga ni mogoče pretvoriti v eno vozlišče. Metoda getSingleNodeValue velja samo za tipa ANY_UNORDERED_NODE_TYPE in FIRST_ORDERED_NODE_TYPE."),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "Metode getSnapshotLength ni mogoče klicati za XPathResult izraza XPath ''{0}'', ker je njegov XPathResultType {1}. Ta metoda velja samo za tipa UNORDERED_NODE_SNAPSHOT_TYPE in ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_NON_ITERATOR_TYPE, "Metode iterateNext ni mogoče klicati za XPathResult izraza XPath ''{0}'', ker je njegov XPathResultType {1}. Ta metoda velja samo za tipa UNORDERED_NODE_ITERATOR_TYPE in ORDERED_NODE_ITERATOR_TYPE."),
    (ER_DOC_MUTATED, "Dokument se je spremenil, odkar je bil vrnjen rezultat. Iterator ni veljaven."),
    (ER_INVALID_XPATH_TYPE, "Neveljaven argument tipa XPath: {0}"),
    (ER_EMPTY_XPATH_RESULT, "Prazen objekt rezultata XPath"),
    (ER_INCOMPATIBLE_TYPES, "XPathResult izraza XPath ''{0}'' ima XPathResultType {1}, ki ga ni mogoče prisiliti v podani XPathResultType {2}."),
    (ER_NULL_RESOLVER, "Predpone ni mogoče razrešiti z ničelnim razreševalnikom predpon."),
    (ER_CANT_CONVERT_TO_STRING, "XPathResult izraza XPath ''{0}'' ima XPathResultType {1}, ki ga ni mogoče pretvoriti v niz."),
    (ER_NON_SNAPSHOT_TYPE, "Metode snapshotItem ni mogoče klicati za XPathResult izraza XPath ''{0}'', ker je njegov XPathResultType {1}. Ta metoda velja samo za tipa UNORDERED_NODE_SNAPSHOT_TYPE in ORDERED_NODE_SNAPSHOT_TYPE."),
    (ER_WRONG_DOCUMENT, "Kontekstno vozlišče ne pripada dokumentu, ki je povezan s tem XPathEvaluator."),
    (ER_WRONG_NODETYPE, "Tip kontekstnega vozlišča ni podprt."),
    (ER_XPATH_ERROR, "Neznana napaka v XPath."),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPathResult izraza XPath ''{0}'' ima XPathResultType {1}, ki ga ni mogoče pretvoriti v število"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "Razširitvene funkcije ''{0}'' ni mogoče priklicati, če je funkcija XMLConstants.FEATURE_SECURE_PROCESSING nastavljena na true."),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "resolveVariable za spremenljivko {0} vrne ničelno vrednost"),
    (ER_UNSUPPORTED_RETURN_TYPE, "Nepodprt povratni tip: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "Izvorni in/ali povratni tip ne sme biti ničelen"),
    (ER_ARG_CANNOT_BE_NULL, "Argument {0} ne sme biti ničelen"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) ni mogoče klicati z objectModel == null"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) ni mogoče klicati z objectModel == \"\""),
    (ER_FEATURE_NAME_NULL, "Poskus nastavitve funkcije z ničelnim imenom: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "Poskus nastavitve neznane funkcije \"{0}\":{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "Poskus pridobitve funkcije z ničelnim imenom: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "Poskus pridobitve neznane funkcije \"{0}\":{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "Poskus nastavitve ničelnega XPathFunctionResolver:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "Poskus nastavitve ničelnega XPathVariableResolver:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "Ime področnih nastavitev v funkciji format-number še ni obravnavano!"),
    (WG_PROPERTY_NOT_SUPPORTED, "Lastnost XSL ni podprta: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "Z imenskim prostorom {0} v lastnosti {1} trenutno ne naredite ničesar"),
    (WG_SECURITY_EXCEPTION, "Pri poskusu dostopa do sistemske lastnosti XSL je prišlo do izjeme SecurityException: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "Stara sintaksa: quo(...) v XPath ni več definiran."),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath potrebuje izpeljani objekt za implementacijo nodeTest!"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "Žetona funkcije ni mogoče najti."),
    (WG_COULDNOT_FIND_FUNCTION, "Ni mogoče najti funkcije: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "Ni mogoče ustvariti URL-ja iz: {0}"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "Možnost -E za razčlenjevalnik DTM ni podprta"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "VariableReference je podan za spremenljivko, ki je zunaj konteksta ali nima definicije!  Ime = {0}"),
    (WG_UNSUPPORTED_ENCODING, "Nepodprto kodiranje: {0}"),
    // UI strings
    (UI_LANGUAGE, "sl"),
    (HELP_LANGUAGE, "sl"),
    (LANGUAGE, "sl"),
    (BAD_CODE, "Parameter za createMessage je zunaj meja"),
    (FORMAT_FAILED, "Med klicem messageFormat je prišlo do izjeme"),
    (VERSION, ">>>>>>> Različica Xalan "),
    (VERSION2, "<<<<<<<"),
    (YES, "da"),
    (LINE, "Vrstica #"),
    (COLUMN, "Stolpec #"),
    (XSLDONE, "XSLProcessor: končano"),
    (XPATH_OPTION, "možnosti xpath: "),
    (OPTION_IN, "   [-in vhodniXMLURL]"),
    (OPTION_SELECT, "   [-select izraz xpath]"),
    (OPTION_MATCH, "   [-match vzorec ujemanja (za diagnostiko ujemanja)]"),
    (OPTION_ANY_EXPR, "Ali pa samo izraz xpath izvede diagnostični izpis"),
    (NO_PARSER_MSG1, "Proces XSL ni uspel."),
    (NO_PARSER_MSG2, "** Razčlenjevalnika ni mogoče najti **"),
    (NO_PARSER_MSG3, "Preverite pot razredov."),
    (NO_PARSER_MSG4, "Če nimate IBM-ovega razčlenjevalnika XML za javo, ga lahko prenesete z"),
    (NO_PARSER_MSG5, "IBM-ovega AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "Napaka: "),
    (WARNING_HEADER, "Opozorilo: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "VZOREC "),
];
